// src/document.rs - Rope-backed document text

use crate::cursor::Position;
use ropey::Rope;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Every char ropey splits lines on.
const LINE_BREAKS: [char; 7] = [
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}',
];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Position {0} is outside the document")]
    OutOfBounds(Position),
    #[error("Rope error: {0}")]
    Rope(#[from] ropey::Error),
}

/// Word-boundary segment of a line, as seen by completion helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub start: Position,
    pub end: Position,
    pub string: String,
}

impl Token {
    /// True for identifier-like tokens (letters, digits and `_`).
    pub fn is_word(&self) -> bool {
        !self.string.is_empty()
            && self
                .string
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
    }

    /// The part of the token that lies before `column`.
    pub fn prefix_before(&self, column: usize) -> String {
        let take = column.saturating_sub(self.start.column);
        self.string.chars().take(take).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line contents without the trailing line break.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(idx).to_string();
        Some(line.trim_end_matches(LINE_BREAKS).to_string())
    }

    pub fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).filter_map(|idx| self.line(idx))
    }

    /// Pull a position back inside the document.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        Position::new(line, pos.column.min(self.line_len(line)))
    }

    /// The position `chars` characters past `pos`, counting line breaks the
    /// way the rope does (`\r`, `\r\n`, `\u{2028}` and friends included).
    pub fn offset_position(&self, pos: Position, chars: usize) -> Position {
        let pos = self.clamp(pos);
        let idx = (self.rope.line_to_char(pos.line) + pos.column + chars)
            .min(self.rope.len_chars());
        let line = self.rope.char_to_line(idx);
        Position::new(line, idx - self.rope.line_to_char(line))
    }

    pub fn insert_text(&mut self, pos: Position, text: &str) -> Result<(), DocumentError> {
        if pos.line >= self.rope.len_lines() || pos.column > self.line_len(pos.line) {
            return Err(DocumentError::OutOfBounds(pos));
        }
        let char_idx = self.rope.line_to_char(pos.line) + pos.column;
        self.rope.try_insert(char_idx, text)?;
        Ok(())
    }

    /// Token ending at or spanning `pos`. At column 0, or past the end of an
    /// empty line, the token is empty and anchored at the clamped position.
    pub fn token_at(&self, pos: Position) -> Token {
        let line = self.line(pos.line).unwrap_or_default();
        let column = pos.column.min(line.chars().count());

        let mut start_col = 0;
        for segment in line.split_word_bounds() {
            let end_col = start_col + segment.chars().count();
            if start_col < column && column <= end_col {
                return Token {
                    start: Position::new(pos.line, start_col),
                    end: Position::new(pos.line, end_col),
                    string: segment.to_string(),
                };
            }
            start_col = end_col;
        }

        let anchor = Position::new(pos.line, column);
        Token {
            start: anchor,
            end: anchor,
            string: String::new(),
        }
    }
}
