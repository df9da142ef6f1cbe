//! Token definitions for the C-subset lexer

use logos::{FilterResult, Lexer, Logos};

use crate::common::Position;

/// Token with its matched source text and starting position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            pos,
        }
    }
}

/// Classification of raw input the token rules could not match.
///
/// This is the lexer's error type; the scanner turns it into a
/// `LexicalError` with a position attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanError {
    #[default]
    IllegalCharacter,
    UnterminatedBlockComment,
}

/// Consumes a `/* ... */` comment body. Comments produce no token; an
/// unclosed comment consumes the rest of the input and surfaces as an
/// error spanning from the opening `/*`.
fn block_comment(lex: &mut Lexer<'_, TokenKind>) -> FilterResult<(), ScanError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            let rest = lex.remainder().len();
            lex.bump(rest);
            FilterResult::Error(ScanError::UnterminatedBlockComment)
        }
    }
}

/// All token kinds in the language
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
pub enum TokenKind {
    // === Keywords ===
    #[token("void")]
    Void,
    #[token("int")]
    Int,
    #[token("float")]
    Float,
    #[token("double")]
    Double,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("do")]
    Do,
    #[token("while")]
    While,
    #[token("return")]
    Return,

    // === Identifiers and literals ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // Decimal digits only; the lexeme is kept as literal text, never
    // interpreted as a bounded numeric value.
    #[regex(r"[0-9]+")]
    IntLiteral,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    // A bare `&` or `|` is not a token; it falls out as an
    // `IllegalCharacter` error and nothing is emitted for it.
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // === Punctuation ===
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Never emitted: the callback either skips the comment or errors
    #[token("/*", block_comment)]
    BlockComment,

    // Special
    Eof,
    Error,
}

impl TokenKind {
    /// Stable integer category code used in the external token listing.
    /// The values are a compatibility contract and must not change.
    pub fn category_code(&self) -> i32 {
        match self {
            Self::Void => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::Double => 4,
            Self::If => 5,
            Self::Else => 6,
            Self::For => 7,
            Self::Do => 8,
            Self::While => 9,
            Self::Return => 10,
            Self::Identifier => 21,
            Self::IntLiteral => 22,
            Self::Plus => 30,
            Self::Minus => 31,
            Self::Star => 32,
            Self::Slash => 33,
            Self::Eq => 34,
            Self::Lt => 35,
            Self::Gt => 36,
            Self::Bang => 37,
            Self::PlusPlus => 38,
            Self::MinusMinus => 39,
            Self::PlusEq => 40,
            Self::MinusEq => 41,
            Self::StarEq => 42,
            Self::SlashEq => 43,
            Self::EqEq => 44,
            Self::NotEq => 45,
            Self::LtEq => 46,
            Self::GtEq => 47,
            Self::LtLt => 48,
            Self::GtGt => 49,
            Self::AmpAmp => 50,
            Self::PipePipe => 51,
            Self::Semi => 60,
            Self::Comma => 61,
            Self::LParen => 62,
            Self::RParen => 63,
            Self::LBrace => 64,
            Self::RBrace => 65,
            Self::Eof => 99,
            Self::Error | Self::BlockComment => -1,
        }
    }
}
