//! Decision engine deciding how a guarded test's outcome is reported.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::issue::{domain::IssueId, ports::IssueTracker};
use crate::known_issue::{
    domain::{DecisionError, HasIssueIds, TestDescriptor, TestFailure, Verdict},
    ports::{AssociatedIssues, NoAssociatedIssues},
};

/// Guards tests annotated with tracker issues.
///
/// For a test with no issue annotations the body runs and its outcome is
/// returned unchanged. Otherwise every annotated issue is resolved first:
///
/// - any lookup failure stops evaluation with
///   [`DecisionError::ResolutionFailure`] and the body is not run;
/// - if no issue is open (counting associated issues) the body is not run
///   and [`DecisionError::NoOpenIssues`] is returned;
/// - a body that skips itself is passed through as
///   [`DecisionError::Propagated`];
/// - a body that fails yields [`Verdict::ExpectedFailure`];
/// - a body that passes yields [`DecisionError::StaleAnnotation`].
pub struct KnownIssueRule<T, A = NoAssociatedIssues>
where
    T: IssueTracker + ?Sized,
    A: AssociatedIssues,
{
    tracker: Arc<T>,
    associated: A,
}

impl<T, A> Clone for KnownIssueRule<T, A>
where
    T: IssueTracker + ?Sized,
    A: AssociatedIssues + Clone,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
            associated: self.associated.clone(),
        }
    }
}

impl<T> KnownIssueRule<T>
where
    T: IssueTracker + ?Sized,
{
    /// Creates a rule resolving issues through `tracker`.
    ///
    /// Share one caching tracker between rules so each issue is looked up
    /// once per process.
    #[must_use]
    pub const fn new(tracker: Arc<T>) -> Self {
        Self {
            tracker,
            associated: NoAssociatedIssues,
        }
    }
}

impl<T, A> KnownIssueRule<T, A>
where
    T: IssueTracker + ?Sized,
    A: AssociatedIssues,
{
    /// Adds an external lookup of issues associated with each test.
    #[must_use]
    pub fn with_associated_issues<B>(self, associated: B) -> KnownIssueRule<T, B>
    where
        B: AssociatedIssues,
    {
        KnownIssueRule {
            tracker: self.tracker,
            associated,
        }
    }

    /// Returns the subset of `issues` the tracker reports as open.
    ///
    /// Issues are resolved in ascending order and the first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::ResolutionFailure`] when an issue's status
    /// cannot be determined.
    pub async fn open_issues(
        &self,
        issues: &BTreeSet<IssueId>,
    ) -> Result<BTreeSet<IssueId>, DecisionError> {
        let mut open = BTreeSet::new();
        for issue in issues {
            if self.tracker.status(issue).await?.is_open() {
                open.insert(issue.clone());
            }
        }
        Ok(open)
    }

    /// Runs `body` under the known-issue policy and classifies its outcome.
    ///
    /// `body` is only invoked when the test is unannotated or at least one
    /// of its issues is open.
    ///
    /// # Errors
    ///
    /// Returns a [`DecisionError`] when the test must be reported as failed
    /// or skipped; see the type-level documentation for the cases.
    #[instrument(skip_all, fields(test = %test.name()))]
    pub async fn evaluate<F, Fut>(
        &self,
        test: &TestDescriptor,
        body: F,
    ) -> Result<Verdict, DecisionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), TestFailure>>,
    {
        let issues = test.issue_ids();
        if issues.is_empty() {
            return body()
                .await
                .map(|()| Verdict::PassedThrough)
                .map_err(DecisionError::Propagated);
        }

        let mut open_issues = self.open_issues(&issues).await?;
        open_issues.extend(self.associated.associated_issues(test));
        if open_issues.is_empty() {
            warn!(issues = ?issues, "test annotated as in progress but all issues are closed");
            return Err(DecisionError::NoOpenIssues { issues });
        }

        match body().await {
            Ok(()) => {
                warn!(open_issues = ?open_issues, "test passed while annotated as in progress");
                Err(DecisionError::StaleAnnotation { open_issues })
            }
            Err(failure) if failure.is_skip() => {
                debug!(%failure, "test skipped itself");
                Err(DecisionError::Propagated(failure))
            }
            Err(cause) => {
                info!(open_issues = ?open_issues, %cause, "known issue: test failure expected");
                Ok(Verdict::ExpectedFailure { open_issues, cause })
            }
        }
    }
}
