//! Successful outcomes of a known-issue decision.

use super::TestFailure;
use crate::issue::domain::IssueId;
use std::collections::BTreeSet;

/// Outcome of a guarded test that should not fail the run.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// The test carried no issue annotations and passed.
    PassedThrough,

    /// The test failed while annotated with at least one open issue.
    ExpectedFailure {
        /// Issues that justify the failure.
        open_issues: BTreeSet<IssueId>,
        /// What the test body reported.
        cause: TestFailure,
    },
}

impl Verdict {
    /// Returns `true` for [`Verdict::ExpectedFailure`].
    #[must_use]
    pub const fn is_expected_failure(&self) -> bool {
        matches!(self, Self::ExpectedFailure { .. })
    }

    /// Returns the open issues behind an expected failure.
    #[must_use]
    pub const fn open_issues(&self) -> Option<&BTreeSet<IssueId>> {
        match self {
            Self::PassedThrough => None,
            Self::ExpectedFailure { open_issues, .. } => Some(open_issues),
        }
    }
}
