// src/helper/registry.rs - Per-session grouping of helpers by kind and file type

use super::dispatch::{HintDispatcher, LintDispatcher, Wrapped};
use super::{Helper, HelperKind};
use crate::editor::EditorWidget;
use crate::extension::{Extension, Scope};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Dispatchers for one editor session, one per `(kind, file type)`.
///
/// Within a dispatcher, helpers keep the order the extensions were supplied
/// in, then the order each extension listed them.
#[derive(Debug, Default)]
pub struct HelperRegistry {
    lint: BTreeMap<String, Arc<LintDispatcher>>,
    hint: BTreeMap<String, Arc<HintDispatcher>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_extensions(extensions: &[Extension]) -> Self {
        let mut lint: BTreeMap<String, LintDispatcher> = BTreeMap::new();
        let mut hint: BTreeMap<String, HintDispatcher> = BTreeMap::new();

        for (idx, extension) in extensions.iter().enumerate() {
            let scope = extension.scope();
            if scope == Scope::Unscoped && !extension.helpers().is_empty() {
                warn!(
                    "extension #{} has helpers but no file name or extension, they never apply",
                    idx
                );
            }

            for helper in extension.helpers() {
                match helper {
                    Helper::Lint {
                        file_type,
                        callback,
                    } => lint
                        .entry(file_type.clone())
                        .or_insert_with(|| LintDispatcher::new(file_type.clone()))
                        .push(Wrapped::new(scope.clone(), Arc::clone(callback))),
                    Helper::Hint {
                        file_type,
                        callback,
                    } => hint
                        .entry(file_type.clone())
                        .or_insert_with(|| HintDispatcher::new(file_type.clone()))
                        .push(Wrapped::new(scope.clone(), Arc::clone(callback))),
                }
            }
        }

        Self {
            lint: lint.into_iter().map(|(k, d)| (k, Arc::new(d))).collect(),
            hint: hint.into_iter().map(|(k, d)| (k, Arc::new(d))).collect(),
        }
    }

    pub fn lint_dispatcher(&self, file_type: &str) -> Option<&Arc<LintDispatcher>> {
        self.lint.get(file_type)
    }

    pub fn hint_dispatcher(&self, file_type: &str) -> Option<&Arc<HintDispatcher>> {
        self.hint.get(file_type)
    }

    /// Registered file types for `kind`, sorted.
    pub fn file_types(&self, kind: HelperKind) -> Vec<&str> {
        match kind {
            HelperKind::Lint => self.lint.keys().map(String::as_str).collect(),
            HelperKind::Hint => self.hint.keys().map(String::as_str).collect(),
        }
    }

    /// Number of dispatchers across both kinds.
    pub fn len(&self) -> usize {
        self.lint.len() + self.hint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lint.is_empty() && self.hint.is_empty()
    }

    /// Install one dispatcher per `(kind, file type)` into the widget.
    /// Installing again replaces what the widget had under the same keys.
    pub fn install<W: EditorWidget + ?Sized>(&self, widget: &mut W) {
        for (file_type, dispatcher) in &self.lint {
            debug!(
                "registering lint dispatcher for '{}' ({} helpers)",
                file_type,
                dispatcher.len()
            );
            widget.register_lint_helper(file_type, Arc::clone(dispatcher));
        }
        for (file_type, dispatcher) in &self.hint {
            debug!(
                "registering hint dispatcher for '{}' ({} helpers)",
                file_type,
                dispatcher.len()
            );
            widget.register_hint_helper(file_type, Arc::clone(dispatcher));
        }
    }
}
