//! Common infrastructure shared across the lexer and the host glue

mod error;
mod source;
mod span;

pub use error::LexicalError;
pub use source::SourceMap;
pub use span::{Position, Span};
