//! Lexer module for tokenizing source text

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
