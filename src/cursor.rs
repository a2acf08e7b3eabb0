// src/cursor.rs - Document positions

use serde::{Deserialize, Serialize};

/// Zero-based location in a document. `column` counts chars, not bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<Position> for lsp_types::Position {
    fn from(pos: Position) -> Self {
        lsp_types::Position {
            line: u32::try_from(pos.line).unwrap_or(u32::MAX),
            character: u32::try_from(pos.column).unwrap_or(u32::MAX),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based, the way compilers print locations
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
