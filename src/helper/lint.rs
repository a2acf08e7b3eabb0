// src/helper/lint.rs - Lint findings

use crate::cursor::Position;
use lsp_types::{Diagnostic, DiagnosticSeverity, Range};
use serde::{Deserialize, Serialize};

pub const DIAGNOSTIC_SOURCE: &str = "texty-ext";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub from: Position,
    pub to: Position,
}

impl LintFinding {
    pub fn error(message: impl Into<String>, from: Position, to: Position) -> Self {
        Self {
            message: message.into(),
            severity: Some(Severity::Error),
            from,
            to,
        }
    }

    pub fn warning(message: impl Into<String>, from: Position, to: Position) -> Self {
        Self {
            message: message.into(),
            severity: Some(Severity::Warning),
            from,
            to,
        }
    }

    /// Findings without a severity are errors.
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            range: Range {
                start: self.from.into(),
                end: self.to.into(),
            },
            severity: Some(match self.effective_severity() {
                Severity::Error => DiagnosticSeverity::ERROR,
                Severity::Warning => DiagnosticSeverity::WARNING,
            }),
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: self.message.clone(),
            ..Default::default()
        }
    }
}
