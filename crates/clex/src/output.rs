//! Plain-text rendering of the three output artifacts
//!
//! The formats here are a compatibility contract with downstream tooling;
//! every byte, including the Chinese header and placeholder lines, must
//! match the listings produced by the reference implementation.

use std::fmt::Write;

use crate::common::LexicalError;
use crate::lexer::Token;
use crate::symtab::SymbolTable;

/// Token listing: one `(<categoryCode>, <lexeme>)` line per token in scan
/// order. The end-of-input token appears last with an empty lexeme.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "({}, {})", token.kind.category_code(), token.lexeme);
    }
    out
}

/// Symbol table listing: header plus one line per symbol in ascending id
/// order, id left-aligned to width 4.
pub fn render_symbol_table(table: &SymbolTable) -> String {
    if table.is_empty() {
        return "符号表为空\n".to_string();
    }

    let mut out = String::from("ID  | 标识符名\n----|----------\n");
    for symbol in table.all_symbols() {
        let _ = writeln!(out, "{:<4}| {}", symbol.id, symbol.name);
    }
    out
}

/// Error listing: one report line per error in discovery order.
pub fn render_errors(errors: &[LexicalError]) -> String {
    if errors.is_empty() {
        return "无错误\n".to_string();
    }

    let mut out = String::new();
    for error in errors {
        out.push_str(&error.report_line());
        out.push('\n');
    }
    out
}
