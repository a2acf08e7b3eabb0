// Common test utilities for extension and helper tests

use std::sync::{Arc, Mutex};
use texty_ext::cursor::Position;
use texty_ext::editor::{DisplayOptions, Editor, EditorWidget};
use texty_ext::helper::{Helper, HintResult, LintFinding};

/// Helpers that report a fixed tag so merged output can be traced back to
/// the helper that produced it
pub mod tagged {
    use super::*;

    #[allow(dead_code)]
    pub fn lint(file_type: &str, tag: &'static str) -> Helper {
        Helper::lint(file_type, move |_, _, _| {
            Ok(vec![LintFinding::warning(tag, Position::new(0, 0), Position::new(0, 1))])
        })
    }

    /// Lint helper that is applicable but finds nothing
    #[allow(dead_code)]
    pub fn clean_lint(file_type: &str) -> Helper {
        Helper::lint(file_type, |_, _, _| Ok(vec![]))
    }

    #[allow(dead_code)]
    pub fn hint(file_type: &str, tag: &'static str, from: Position, to: Position) -> Helper {
        Helper::hint(file_type, move |_, _| {
            Ok(HintResult::new(vec![tag.to_string()], from, to))
        })
    }

    #[allow(dead_code)]
    pub fn failing_lint(file_type: &str, message: &'static str) -> Helper {
        Helper::lint(file_type, move |_, _, _| Err(anyhow::anyhow!(message)))
    }

    #[allow(dead_code)]
    pub fn messages(findings: &[LintFinding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }
}

/// Helpers that record each call, for checking which callbacks actually ran
pub mod recording {
    use super::*;

    pub type CallLog = Arc<Mutex<Vec<String>>>;

    #[allow(dead_code)]
    pub fn new_log() -> CallLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    /// Lint helper that logs `tag@file` on every call
    #[allow(dead_code)]
    pub fn lint(file_type: &str, tag: &'static str, log: &CallLog) -> Helper {
        let log = Arc::clone(log);
        Helper::lint(file_type, move |_, _, editor| {
            let file = editor.file_name().unwrap_or("<none>").to_string();
            log.lock().unwrap().push(format!("{}@{}", tag, file));
            Ok(vec![])
        })
    }

    #[allow(dead_code)]
    pub fn calls(log: &CallLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }
}

/// Editor setup shortcuts
pub mod session {
    use super::*;

    /// Editor with lint mode on and `file_name` open
    #[allow(dead_code)]
    pub fn editor_with(file_name: &str, text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.apply_display(DisplayOptions {
            lint: true,
            ..DisplayOptions::default()
        });
        editor.open(file_name, text);
        editor
    }
}
