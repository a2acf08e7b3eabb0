// src/helper/merge.rs - Combine the outcomes of one dispatcher invocation

use super::{HelperOutcome, HintResult, LintFinding};

/// Concatenate the findings of every applicable callback, in callback order.
pub fn merge_lint<I>(outcomes: I) -> Vec<LintFinding>
where
    I: IntoIterator<Item = HelperOutcome<Vec<LintFinding>>>,
{
    outcomes
        .into_iter()
        .filter_map(HelperOutcome::applicable)
        .flatten()
        .collect()
}

/// Concatenate the suggestion lists of every applicable callback.
///
/// The replacement range comes from the first applicable result, even when its
/// list is empty. Returns `None` when no callback applied, which is distinct
/// from a hint with no suggestions.
pub fn merge_hint<I>(outcomes: I) -> Option<HintResult>
where
    I: IntoIterator<Item = HelperOutcome<HintResult>>,
{
    let mut applicable = outcomes.into_iter().filter_map(HelperOutcome::applicable);
    let mut merged = applicable.next()?;
    for result in applicable {
        merged.list.extend(result.list);
    }
    Some(merged)
}
