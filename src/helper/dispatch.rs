// src/helper/dispatch.rs - Per (kind, file type) fan-out over wrapped callbacks

use super::merge::{merge_hint, merge_lint};
use super::{
    HelperKind, HelperOptions, HelperOutcome, HintCallback, HintResult, LintCallback, LintFinding,
};
use crate::editor::{DocumentSnapshot, EditorHandle};
use crate::extension::Scope;
use log::trace;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("{kind} helper for file type '{file_type}' failed: {source}")]
    Callback {
        kind: HelperKind,
        file_type: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{kind} helper task for file type '{file_type}' did not complete: {source}")]
    Join {
        kind: HelperKind,
        file_type: String,
        source: JoinError,
    },
}

/// A raw callback guarded by its extension's matching condition.
///
/// The guard runs against the editor's active filename at call time, not
/// against the file that was open when the helper was registered.
#[derive(Clone)]
pub struct Wrapped<C> {
    scope: Scope,
    callback: C,
}

impl<C> Wrapped<C> {
    pub fn new(scope: Scope, callback: C) -> Self {
        Self { scope, callback }
    }

    pub fn applies_to(&self, editor: &dyn EditorHandle) -> bool {
        editor
            .file_name()
            .is_some_and(|name| self.scope.matches(name))
    }
}

impl Wrapped<LintCallback> {
    pub fn call(
        &self,
        code: &str,
        options: &HelperOptions,
        editor: &dyn EditorHandle,
    ) -> anyhow::Result<HelperOutcome<Vec<LintFinding>>> {
        if !self.applies_to(editor) {
            return Ok(HelperOutcome::Inapplicable);
        }
        (self.callback)(code, options, editor).map(HelperOutcome::Applicable)
    }
}

impl Wrapped<HintCallback> {
    pub fn call(
        &self,
        editor: &dyn EditorHandle,
        options: &HelperOptions,
    ) -> anyhow::Result<HelperOutcome<HintResult>> {
        if !self.applies_to(editor) {
            return Ok(HelperOutcome::Inapplicable);
        }
        (self.callback)(editor, options).map(HelperOutcome::Applicable)
    }
}

fn callback_error(kind: HelperKind, file_type: &str, err: anyhow::Error) -> DispatchError {
    DispatchError::Callback {
        kind,
        file_type: file_type.to_string(),
        source: err.into(),
    }
}

fn join_error(kind: HelperKind, file_type: &str, err: JoinError) -> DispatchError {
    DispatchError::Join {
        kind,
        file_type: file_type.to_string(),
        source: err,
    }
}

/// Await every handle, then report outcomes in spawn order so they line up
/// with registration order. The first failure in that order wins.
async fn join_in_order<T>(
    kind: HelperKind,
    file_type: &str,
    handles: Vec<JoinHandle<anyhow::Result<HelperOutcome<T>>>>,
) -> Result<Vec<HelperOutcome<T>>, DispatchError> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await);
    }

    results
        .into_iter()
        .map(|joined| {
            joined
                .map_err(|e| join_error(kind, file_type, e))?
                .map_err(|e| callback_error(kind, file_type, e))
        })
        .collect()
}

/// The single lint callback installed for one file type.
pub struct LintDispatcher {
    file_type: String,
    helpers: Vec<Wrapped<LintCallback>>,
}

impl LintDispatcher {
    pub fn new(file_type: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            helpers: Vec::new(),
        }
    }

    pub fn push(&mut self, helper: Wrapped<LintCallback>) {
        self.helpers.push(helper);
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Run every wrapped callback in order, then merge. The first callback
    /// failure is returned as is; later callbacks do not run.
    pub fn run(
        &self,
        code: &str,
        options: &HelperOptions,
        editor: &dyn EditorHandle,
    ) -> Result<Vec<LintFinding>, DispatchError> {
        let mut outcomes = Vec::with_capacity(self.helpers.len());
        for helper in &self.helpers {
            let outcome = helper
                .call(code, options, editor)
                .map_err(|e| callback_error(HelperKind::Lint, &self.file_type, e))?;
            outcomes.push(outcome);
        }
        let findings = merge_lint(outcomes);
        trace!(
            "lint '{}': {} helpers, {} findings",
            self.file_type,
            self.helpers.len(),
            findings.len()
        );
        Ok(findings)
    }

    /// Run every wrapped callback on the blocking pool and join them all
    /// before merging.
    ///
    /// Unlike [`LintDispatcher::run`], a failing callback does not stop the
    /// others: all of them run to completion, then the first failure in
    /// registration order is returned.
    pub async fn run_async(
        &self,
        snapshot: DocumentSnapshot,
        options: HelperOptions,
    ) -> Result<Vec<LintFinding>, DispatchError> {
        let code: Arc<str> = Arc::from(snapshot.document().text());
        let snapshot = Arc::new(snapshot);
        let options = Arc::new(options);

        let handles = self
            .helpers
            .iter()
            .cloned()
            .map(|helper| {
                let code = Arc::clone(&code);
                let snapshot = Arc::clone(&snapshot);
                let options = Arc::clone(&options);
                tokio::task::spawn_blocking(move || helper.call(&code, &options, &*snapshot))
            })
            .collect();

        let outcomes = join_in_order(HelperKind::Lint, &self.file_type, handles).await?;
        Ok(merge_lint(outcomes))
    }
}

impl std::fmt::Debug for LintDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintDispatcher")
            .field("file_type", &self.file_type)
            .field("helpers", &self.helpers.len())
            .finish()
    }
}

/// The single hint callback installed for one file type.
pub struct HintDispatcher {
    file_type: String,
    helpers: Vec<Wrapped<HintCallback>>,
}

impl HintDispatcher {
    pub fn new(file_type: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            helpers: Vec::new(),
        }
    }

    pub fn push(&mut self, helper: Wrapped<HintCallback>) {
        self.helpers.push(helper);
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// `Ok(None)` when no callback applied to the active file.
    pub fn run(
        &self,
        editor: &dyn EditorHandle,
        options: &HelperOptions,
    ) -> Result<Option<HintResult>, DispatchError> {
        let mut outcomes = Vec::with_capacity(self.helpers.len());
        for helper in &self.helpers {
            let outcome = helper
                .call(editor, options)
                .map_err(|e| callback_error(HelperKind::Hint, &self.file_type, e))?;
            outcomes.push(outcome);
        }
        Ok(merge_hint(outcomes))
    }

    /// Blocking-pool counterpart of [`HintDispatcher::run`]. Every callback
    /// runs even when an earlier one fails.
    pub async fn run_async(
        &self,
        snapshot: DocumentSnapshot,
        options: HelperOptions,
    ) -> Result<Option<HintResult>, DispatchError> {
        let snapshot = Arc::new(snapshot);
        let options = Arc::new(options);

        let handles = self
            .helpers
            .iter()
            .cloned()
            .map(|helper| {
                let snapshot = Arc::clone(&snapshot);
                let options = Arc::clone(&options);
                tokio::task::spawn_blocking(move || helper.call(&*snapshot, &options))
            })
            .collect();

        let outcomes = join_in_order(HelperKind::Hint, &self.file_type, handles).await?;
        Ok(merge_hint(outcomes))
    }
}

impl std::fmt::Debug for HintDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintDispatcher")
            .field("file_type", &self.file_type)
            .field("helpers", &self.helpers.len())
            .finish()
    }
}
