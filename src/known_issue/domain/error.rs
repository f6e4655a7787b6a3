//! Error types for known-issue decisions.

use super::TestFailure;
use crate::issue::{domain::IssueId, ports::IssueTrackerError};
use std::collections::BTreeSet;
use thiserror::Error;

/// Reasons a guarded test must be reported as failed or skipped.
#[derive(Debug, Clone, Error)]
pub enum DecisionError {
    /// Every annotated issue is closed, so nothing excuses the test.
    #[error("test annotated as in progress, but no open issues found among {}", join(.issues))]
    NoOpenIssues {
        /// Issues the test is annotated with.
        issues: BTreeSet<IssueId>,
    },

    /// The test passed while still annotated with open issues.
    #[error("test passed while annotated as in progress on {}", join(.open_issues))]
    StaleAnnotation {
        /// Issues that are still open.
        open_issues: BTreeSet<IssueId>,
    },

    /// An annotated issue's status could not be determined.
    #[error("cannot decide known-issue status: {source}")]
    ResolutionFailure {
        /// Underlying lookup failure, naming the issue.
        #[from]
        source: IssueTrackerError,
    },

    /// The test body's own failure or skip signal, passed through unchanged.
    #[error(transparent)]
    Propagated(TestFailure),
}

impl DecisionError {
    /// Returns `true` when this carries a skip signal raised by the test.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Propagated(failure) if failure.is_skip())
    }

    /// Returns `true` for failures caused by a stale or unjustified
    /// annotation rather than by the test or the tracker.
    #[must_use]
    pub const fn is_annotation_error(&self) -> bool {
        matches!(self, Self::NoOpenIssues { .. } | Self::StaleAnnotation { .. })
    }
}

fn join(issues: &BTreeSet<IssueId>) -> String {
    issues
        .iter()
        .map(IssueId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
