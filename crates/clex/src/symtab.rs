//! Identifier symbol table
//!
//! A name -> numeric-id registry backed by a string interner. Ids are
//! handed out in first-occurrence order starting at 0, are never reused,
//! and repeat insertions are idempotent. Enumeration is in ascending id
//! order regardless of the interner's internal layout.

use string_interner::backend::StringBackend;
use string_interner::symbol::SymbolU32;
use string_interner::{StringInterner, Symbol};

/// One symbol table entry. Created once per distinct identifier spelling,
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub id: u32,
    pub name: String,
}

/// Registry of distinct identifier spellings seen during a scan.
///
/// Tokens reference identifiers by lexeme only; the table is the sole
/// owner of the id assignment.
#[derive(Debug, Default)]
pub struct SymbolTable {
    interner: StringInterner<StringBackend<SymbolU32>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            interner: StringInterner::new(),
        }
    }

    /// Registers `name`, returning its id. Repeat insertions return the
    /// existing id unchanged; fresh names get the next sequential id.
    pub fn insert(&mut self, name: &str) -> u32 {
        self.interner.get_or_intern(name).to_usize() as u32
    }

    /// Read-only query; never allocates an id.
    pub fn lookup(&self, name: &str) -> Option<SymbolInfo> {
        let sym = self.interner.get(name)?;
        Some(SymbolInfo {
            id: sym.to_usize() as u32,
            name: self.interner.resolve(sym)?.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.interner.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Every entry, sorted by ascending id. Ids form the contiguous range
    /// `0..len()`, so this walks them directly.
    pub fn all_symbols(&self) -> Vec<SymbolInfo> {
        (0..self.interner.len())
            .filter_map(|id| {
                let sym = SymbolU32::try_from_usize(id)?;
                let name = self.interner.resolve(sym)?;
                Some(SymbolInfo {
                    id: id as u32,
                    name: name.to_string(),
                })
            })
            .collect()
    }
}
