//! Lexical error type and report formatting

use thiserror::Error;

use super::Position;

/// A diagnostic recorded during scanning.
///
/// Errors accumulate for the whole scan in discovery order; the scanner
/// never aborts on malformed input, so every variant is recoverable.
/// The `Display` impl reproduces the original diagnostic text verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// A byte that starts no valid token, including a bare `&` or `|`.
    #[error("非法字符 '{ch}'")]
    IllegalCharacter { ch: char, pos: Position },

    /// Identifier lexeme longer than 32 characters. `name` is the full,
    /// untruncated spelling.
    #[error("标识符 '{name}' 长度超过32个字符")]
    IdentifierTooLong { name: String, pos: Position },

    /// End of input reached inside `/* ... */`. `pos` is the position of
    /// the opening `/`, which is also what the message names.
    #[error("多行注释未闭合（从 {pos} 开始）")]
    UnterminatedBlockComment { pos: Position },
}

impl LexicalError {
    pub fn position(&self) -> Position {
        match self {
            Self::IllegalCharacter { pos, .. }
            | Self::IdentifierTooLong { pos, .. }
            | Self::UnterminatedBlockComment { pos } => *pos,
        }
    }

    /// One line of the error listing: `错误: [<line>:<column>] <message>`.
    pub fn report_line(&self) -> String {
        let pos = self.position();
        format!("错误: [{}:{}] {}", pos.line, pos.column, self)
    }
}
