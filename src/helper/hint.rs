// src/helper/hint.rs - Completion hints

use crate::cursor::Position;
use lsp_types::{CompletionItem, CompletionTextEdit, Range, TextEdit};
use serde::{Deserialize, Serialize};

/// Completion suggestions replacing the `from..to` range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResult {
    pub list: Vec<String>,
    pub from: Position,
    pub to: Position,
}

impl HintResult {
    pub fn new(list: Vec<String>, from: Position, to: Position) -> Self {
        Self { list, from, to }
    }

    pub fn empty_at(pos: Position) -> Self {
        Self::new(Vec::new(), pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn to_completion_items(&self) -> Vec<CompletionItem> {
        let range = Range {
            start: self.from.into(),
            end: self.to.into(),
        };
        self.list
            .iter()
            .map(|label| CompletionItem {
                label: label.clone(),
                text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                    range,
                    new_text: label.clone(),
                })),
                ..Default::default()
            })
            .collect()
    }
}
