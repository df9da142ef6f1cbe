//! Scanner driving a logos lexer over the full source

use logos::Logos;

use super::token::{ScanError, Token, TokenKind};
use crate::common::{LexicalError, SourceMap, Span};
use crate::symtab::SymbolTable;

/// Identifiers longer than this are reported and truncated.
const MAX_IDENTIFIER_LEN: usize = 32;

/// Single-pass scanner for one source buffer.
///
/// Scanning never fails outright: malformed input is recorded in the error
/// list and the cursor keeps moving, so a complete token sequence (with a
/// trailing end-of-input marker) is always produced. A scanner instance is
/// single-use; construct a fresh one per source.
pub struct Scanner<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    map: SourceMap<'a>,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    symbols: SymbolTable,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            map: SourceMap::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Scan the whole source left to right and return the token sequence,
    /// ending with the `Eof` token at the cursor's resting position.
    pub fn tokenize(&mut self) -> &[Token] {
        while let Some(result) = self.inner.next() {
            let span = Span::from(self.inner.span());
            match result {
                Ok(TokenKind::Identifier) => self.emit_identifier(span),
                Ok(kind) => {
                    let lexeme = self.inner.slice();
                    let pos = self.map.position(span.start);
                    self.tokens.push(Token::new(kind, lexeme, pos));
                }
                Err(ScanError::IllegalCharacter) => {
                    // Covers both unrecognized characters and a bare `&`
                    // or `|`; no token is emitted for any of them.
                    let pos = self.map.position(span.start);
                    if let Some(ch) = self.inner.slice().chars().next() {
                        self.errors.push(LexicalError::IllegalCharacter { ch, pos });
                    }
                }
                Err(ScanError::UnterminatedBlockComment) => {
                    // Reported at the opening `/*`, not where scanning stopped
                    let pos = self.map.position(span.start);
                    self.errors
                        .push(LexicalError::UnterminatedBlockComment { pos });
                }
            }
        }

        let end = self.map.position(self.map.source().len());
        self.tokens.push(Token::new(TokenKind::Eof, "", end));
        &self.tokens
    }

    /// Identifier aside: keywords are matched on the full spelling by the
    /// token rules before this runs, so only genuine identifiers arrive
    /// here. Over-long names are reported with their full text, then
    /// truncated for both the token lexeme and the symbol table entry.
    fn emit_identifier(&mut self, span: Span) {
        let text = self.inner.slice();
        let pos = self.map.position(span.start);

        // Identifier characters are ASCII by construction, so byte
        // indexing is safe here.
        let lexeme = if text.len() > MAX_IDENTIFIER_LEN {
            self.errors.push(LexicalError::IdentifierTooLong {
                name: text.to_string(),
                pos: self.map.position(span.end),
            });
            &text[..MAX_IDENTIFIER_LEN]
        } else {
            text
        };

        self.symbols.insert(lexeme);
        self.tokens.push(Token::new(TokenKind::Identifier, lexeme, pos));
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics in discovery order
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Get the source being scanned
    pub fn source(&self) -> &'a str {
        self.map.source()
    }
}
