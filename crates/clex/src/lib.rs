//! clex - lexical analyzer for a small C-like teaching language
//!
//! Turns raw source text into three artifacts: a classified token stream,
//! a deduplicated identifier symbol table, and a list of lexical
//! diagnostics with line/column positions.
//!
//! ## Architecture
//!
//! - **Lexer** (`lexer/`): logos-driven scanner, token kinds, category codes
//! - **Symbol table** (`symtab`): identifier -> stable-id registry
//! - **Common** (`common/`): spans, positions, source mapping, errors
//! - **Output** (`output`): plain-text rendering of the three artifacts
//!
//! The scan is a single synchronous pass over an in-memory string; the host
//! (the `clex` binary) handles file I/O and console reporting.

pub mod common;
pub mod lexer;
pub mod output;
pub mod symtab;

// Re-exports for convenience
pub use common::{LexicalError, Position, SourceMap, Span};
pub use lexer::{Scanner, Token, TokenKind};
pub use symtab::{SymbolInfo, SymbolTable};
