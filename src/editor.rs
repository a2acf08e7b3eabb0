// src/editor.rs - Editor widget boundary and an in-memory editor session

use crate::cursor::Position;
use crate::document::{Document, DocumentError, Token};
use crate::helper::dispatch::DispatchError;
use crate::helper::{HelperOptions, HintDispatcher, HintResult, LintDispatcher, LintFinding};
use crate::mode::mode_for_file_name;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Read access to editor state, as seen by helper callbacks.
pub trait EditorHandle {
    fn file_name(&self) -> Option<&str>;
    fn document(&self) -> &Document;
    fn cursor(&self) -> Position;

    fn token_at(&self, pos: Position) -> Token {
        self.document().token_at(pos)
    }
}

/// The editor widget operations this crate drives.
pub trait EditorWidget: EditorHandle {
    fn options(&self) -> &EditorOptions;
    /// Replace gutters, lint flag and spellcheck flag in one update.
    fn apply_display(&mut self, display: DisplayOptions);
    fn set_theme(&mut self, theme: Option<String>);
    fn set_read_only(&mut self, read_only: bool);
    fn register_lint_helper(&mut self, file_type: &str, dispatcher: Arc<LintDispatcher>);
    fn register_hint_helper(&mut self, file_type: &str, dispatcher: Arc<HintDispatcher>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayOptions {
    pub gutters: Vec<String>,
    pub lint: bool,
    pub spell_check: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditorOptions {
    #[serde(flatten)]
    pub display: DisplayOptions,
    pub theme: Option<String>,
    pub read_only: bool,
    /// File-type key used to look up registered helpers.
    pub mode: Option<String>,
    pub lint_options: HelperOptions,
    pub hint_options: HelperOptions,
}

/// Owned copy of the state a callback may read, for running helpers off the
/// editor's thread.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    file_name: Option<String>,
    document: Document,
    cursor: Position,
}

impl DocumentSnapshot {
    pub fn new(file_name: Option<String>, document: Document, cursor: Position) -> Self {
        Self {
            file_name,
            document,
            cursor,
        }
    }
}

impl EditorHandle for DocumentSnapshot {
    fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn cursor(&self) -> Position {
        self.cursor
    }
}

#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    cursor: Position,
    file_name: Option<String>,
    options: EditorOptions,
    lint_helpers: HashMap<String, Arc<LintDispatcher>>,
    hint_helpers: HashMap<String, Arc<HintDispatcher>>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document and make `file_name` the active file. The mode
    /// follows the filename's suffix.
    pub fn open(&mut self, file_name: &str, text: &str) {
        self.document = Document::from(text);
        self.cursor = Position::default();
        self.set_file_name(file_name);
    }

    pub fn open_file(&mut self, path: &Path) -> std::io::Result<()> {
        let text = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.open(&name, &text);
        Ok(())
    }

    /// Rename the active file without touching the text.
    pub fn set_file_name(&mut self, file_name: &str) {
        self.file_name = Some(file_name.to_string());
        self.options.mode = mode_for_file_name(file_name).map(str::to_string);
        debug!(
            "active file '{}' (mode {:?})",
            file_name, self.options.mode
        );
    }

    pub fn set_mode(&mut self, mode: Option<String>) {
        self.options.mode = mode;
    }

    pub fn mode(&self) -> Option<&str> {
        self.options.mode.as_deref()
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.document.clamp(pos);
    }

    /// Insert at the cursor and move the cursor past the inserted text.
    pub fn insert_text(&mut self, text: &str) -> Result<(), DocumentError> {
        self.document.insert_text(self.cursor, text)?;
        let cursor = self.document.offset_position(self.cursor, text.chars().count());
        self.cursor = self.document.clamp(cursor);
        Ok(())
    }

    pub fn set_lint_options(&mut self, options: HelperOptions) {
        self.options.lint_options = options;
    }

    pub fn set_hint_options(&mut self, options: HelperOptions) {
        self.options.hint_options = options;
    }

    pub fn lint_helper(&self, file_type: &str) -> Option<&Arc<LintDispatcher>> {
        self.lint_helpers.get(file_type)
    }

    pub fn hint_helper(&self, file_type: &str) -> Option<&Arc<HintDispatcher>> {
        self.hint_helpers.get(file_type)
    }

    fn active_lint_dispatcher(&self) -> Option<Arc<LintDispatcher>> {
        if !self.options.display.lint {
            return None;
        }
        self.lint_helpers.get(self.mode()?).cloned()
    }

    /// Lint the document with the dispatcher registered for the current mode.
    /// Nothing runs while lint mode is off.
    pub fn lint(&self) -> Result<Vec<LintFinding>, DispatchError> {
        match self.active_lint_dispatcher() {
            Some(dispatcher) => {
                dispatcher.run(&self.document.text(), &self.options.lint_options, self)
            }
            None => Ok(Vec::new()),
        }
    }

    pub async fn lint_async(&self) -> Result<Vec<LintFinding>, DispatchError> {
        match self.active_lint_dispatcher() {
            Some(dispatcher) => {
                dispatcher
                    .run_async(self.snapshot(), self.options.lint_options.clone())
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    /// Completion at the cursor. `Ok(None)` when no helper applies.
    pub fn hint(&self) -> Result<Option<HintResult>, DispatchError> {
        let Some(dispatcher) = self.mode().and_then(|mode| self.hint_helpers.get(mode)) else {
            return Ok(None);
        };
        dispatcher.run(self, &self.options.hint_options)
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot::new(self.file_name.clone(), self.document.clone(), self.cursor)
    }
}

impl EditorHandle for Editor {
    fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn cursor(&self) -> Position {
        self.cursor
    }
}

impl EditorWidget for Editor {
    fn options(&self) -> &EditorOptions {
        &self.options
    }

    fn apply_display(&mut self, display: DisplayOptions) {
        self.options.display = display;
    }

    fn set_theme(&mut self, theme: Option<String>) {
        self.options.theme = theme;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.options.read_only = read_only;
    }

    fn register_lint_helper(&mut self, file_type: &str, dispatcher: Arc<LintDispatcher>) {
        self.lint_helpers.insert(file_type.to_string(), dispatcher);
    }

    fn register_hint_helper(&mut self, file_type: &str, dispatcher: Arc<HintDispatcher>) {
        self.hint_helpers.insert(file_type.to_string(), dispatcher);
    }
}
