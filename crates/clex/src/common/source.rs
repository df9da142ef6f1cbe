//! Byte-offset to line/column mapping over the source buffer

use codespan_reporting::files::{Files, SimpleFile};

use super::Position;

/// Maps byte offsets from lexer spans to 1-based line/column positions.
pub struct SourceMap<'a> {
    file: SimpleFile<&'a str, &'a str>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        // The file name only matters to codespan's terminal renderer,
        // which this crate does not drive.
        Self {
            file: SimpleFile::new("<input>", source),
        }
    }

    /// Position of the character at `byte`. An offset equal to the source
    /// length resolves to the cursor's resting position past the last
    /// character, which is where the end-of-input token lives.
    pub fn position(&self, byte: usize) -> Position {
        let byte = byte.min(self.source().len());
        match self.file.location((), byte) {
            Ok(loc) => Position::new(loc.line_number, loc.column_number),
            // Unreachable after the clamp above
            Err(_) => Position::new(1, 1),
        }
    }

    pub fn source(&self) -> &'a str {
        *self.file.source()
    }
}
