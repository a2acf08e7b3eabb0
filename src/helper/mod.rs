// src/helper/mod.rs - Lint and hint helpers contributed by extensions

pub mod dispatch;
pub mod hint;
pub mod lint;
pub mod merge;
pub mod registry;

pub use dispatch::{HintDispatcher, LintDispatcher};
pub use hint::HintResult;
pub use lint::{LintFinding, Severity};
pub use registry::HelperRegistry;

use crate::editor::EditorHandle;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

pub type LintCallback = Arc<
    dyn Fn(&str, &HelperOptions, &dyn EditorHandle) -> anyhow::Result<Vec<LintFinding>>
        + Send
        + Sync,
>;

pub type HintCallback =
    Arc<dyn Fn(&dyn EditorHandle, &HelperOptions) -> anyhow::Result<HintResult> + Send + Sync>;

pub fn lint_callback<F>(callback: F) -> LintCallback
where
    F: Fn(&str, &HelperOptions, &dyn EditorHandle) -> anyhow::Result<Vec<LintFinding>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(callback)
}

pub fn hint_callback<F>(callback: F) -> HintCallback
where
    F: Fn(&dyn EditorHandle, &HelperOptions) -> anyhow::Result<HintResult> + Send + Sync + 'static,
{
    Arc::new(callback)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperKind {
    Lint,
    Hint,
}

impl std::fmt::Display for HelperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HelperKind::Lint => write!(f, "lint"),
            HelperKind::Hint => write!(f, "hint"),
        }
    }
}

/// A callback registered under a widget file-type key.
///
/// The variant fixes which merge applies to the callback's results.
#[derive(Clone)]
pub enum Helper {
    Lint {
        file_type: String,
        callback: LintCallback,
    },
    Hint {
        file_type: String,
        callback: HintCallback,
    },
}

impl Helper {
    pub fn lint<F>(file_type: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str, &HelperOptions, &dyn EditorHandle) -> anyhow::Result<Vec<LintFinding>>
            + Send
            + Sync
            + 'static,
    {
        Helper::Lint {
            file_type: file_type.into(),
            callback: lint_callback(callback),
        }
    }

    pub fn hint<F>(file_type: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&dyn EditorHandle, &HelperOptions) -> anyhow::Result<HintResult>
            + Send
            + Sync
            + 'static,
    {
        Helper::Hint {
            file_type: file_type.into(),
            callback: hint_callback(callback),
        }
    }

    pub fn kind(&self) -> HelperKind {
        match self {
            Helper::Lint { .. } => HelperKind::Lint,
            Helper::Hint { .. } => HelperKind::Hint,
        }
    }

    pub fn file_type(&self) -> &str {
        match self {
            Helper::Lint { file_type, .. } | Helper::Hint { file_type, .. } => file_type,
        }
    }
}

impl std::fmt::Debug for Helper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Helper")
            .field("kind", &self.kind())
            .field("file_type", &self.file_type())
            .finish_non_exhaustive()
    }
}

/// What one wrapped callback produced for one invocation.
///
/// `Inapplicable` means the callback's extension does not cover the active
/// file and the callback was not run. An applicable result may still be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum HelperOutcome<T> {
    Inapplicable,
    Applicable(T),
}

impl<T> HelperOutcome<T> {
    pub fn applicable(self) -> Option<T> {
        match self {
            HelperOutcome::Applicable(value) => Some(value),
            HelperOutcome::Inapplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, HelperOutcome::Applicable(_))
    }
}

/// Free-form options handed to helper callbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelperOptions(Map<String, Value>);

impl HelperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// String entries of an array option; non-string entries are skipped.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries of `self` layered over `base`.
    pub fn merged_over(&self, base: &HelperOptions) -> HelperOptions {
        let mut merged = base.0.clone();
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        HelperOptions(merged)
    }
}

impl From<Map<String, Value>> for HelperOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_helper_kind_and_file_type() {
        let helper = Helper::lint("python", |_, _, _| Ok(vec![]));
        assert_eq!(helper.kind(), HelperKind::Lint);
        assert_eq!(helper.file_type(), "python");
        assert!(format!("{:?}", helper).contains("python"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(HelperKind::Lint.to_string(), "lint");
        assert_eq!(HelperKind::Hint.to_string(), "hint");
    }

    #[test]
    fn test_outcome_applicable() {
        assert_eq!(HelperOutcome::Applicable(3).applicable(), Some(3));
        assert_eq!(HelperOutcome::<u8>::Inapplicable.applicable(), None);
        assert!(HelperOutcome::Applicable(Vec::<u8>::new()).is_applicable());
    }

    #[test]
    fn test_options_accessors() {
        let options = HelperOptions::new()
            .with("max_line_length", 80)
            .with("strict", true)
            .with("words", json!(["alpha", 3, "beta"]));
        assert_eq!(options.get_u64("max_line_length"), Some(80));
        assert_eq!(options.get("strict"), Some(&Value::Bool(true)));
        assert_eq!(options.get_strings("words"), vec!["alpha", "beta"]);
        assert_eq!(options.get_u64("missing"), None);
        assert!(options.get_strings("strict").is_empty());
    }

    #[test]
    fn test_options_merged_over() {
        let base = HelperOptions::new().with("a", 1).with("b", 2);
        let top = HelperOptions::new().with("b", 20).with("c", 30);
        let merged = top.merged_over(&base);
        assert_eq!(merged.get_u64("a"), Some(1));
        assert_eq!(merged.get_u64("b"), Some(20));
        assert_eq!(merged.get_u64("c"), Some(30));
    }
}
