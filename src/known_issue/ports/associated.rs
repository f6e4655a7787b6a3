//! Externally supplied issues associated with a test.

use crate::issue::domain::IssueId;
use crate::known_issue::domain::TestDescriptor;
use std::collections::BTreeSet;

/// Looks up issues associated with a test outside its own annotations.
///
/// Associated issues count as open without being resolved against the
/// tracker. They only take effect for tests that carry at least one issue
/// annotation of their own.
pub trait AssociatedIssues: Send + Sync {
    /// Returns the issues associated with the test.
    fn associated_issues(&self, test: &TestDescriptor) -> BTreeSet<IssueId>;
}

impl<F> AssociatedIssues for F
where
    F: Fn(&TestDescriptor) -> BTreeSet<IssueId> + Send + Sync,
{
    fn associated_issues(&self, test: &TestDescriptor) -> BTreeSet<IssueId> {
        self(test)
    }
}

/// Lookup that never associates any issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAssociatedIssues;

impl AssociatedIssues for NoAssociatedIssues {
    fn associated_issues(&self, _test: &TestDescriptor) -> BTreeSet<IssueId> {
        BTreeSet::new()
    }
}
