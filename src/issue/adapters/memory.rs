//! In-memory issue tracker for offline runs and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::issue::{
    domain::{IssueId, IssueStatus},
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};

/// Thread-safe tracker answering from a fixed table.
///
/// Unknown identifiers resolve to an HTTP 404 failure, mirroring what a real
/// tracker reports for a ticket that does not exist.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    statuses: HashMap<IssueId, IssueTrackerResult<IssueStatus>>,
    lookups: HashMap<IssueId, usize>,
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status reported for an issue, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Transport`] when lock acquisition fails.
    pub fn set_status(&self, issue: IssueId, status: IssueStatus) -> IssueTrackerResult<()> {
        self.set_result(issue, Ok(status))
    }

    /// Makes lookups of an issue fail with the given error.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Transport`] when lock acquisition fails.
    pub fn set_failure(&self, issue: IssueId, error: IssueTrackerError) -> IssueTrackerResult<()> {
        self.set_result(issue, Err(error))
    }

    /// Returns how many times an issue has been looked up.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Transport`] when lock acquisition fails.
    pub fn lookups(&self, issue: &IssueId) -> IssueTrackerResult<usize> {
        let state = self.state.read().map_err(|err| IssueTrackerError::Transport {
            issue: issue.clone(),
            reason: err.to_string(),
        })?;
        Ok(state.lookups.get(issue).copied().unwrap_or_default())
    }

    fn set_result(
        &self,
        issue: IssueId,
        result: IssueTrackerResult<IssueStatus>,
    ) -> IssueTrackerResult<()> {
        let mut state = self.state.write().map_err(|err| IssueTrackerError::Transport {
            issue: issue.clone(),
            reason: err.to_string(),
        })?;
        state.statuses.insert(issue, result);
        Ok(())
    }
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn status(&self, issue: &IssueId) -> IssueTrackerResult<IssueStatus> {
        let mut state = self.state.write().map_err(|err| IssueTrackerError::Transport {
            issue: issue.clone(),
            reason: err.to_string(),
        })?;
        *state.lookups.entry(issue.clone()).or_default() += 1;
        state
            .statuses
            .get(issue)
            .cloned()
            .unwrap_or_else(|| {
                Err(IssueTrackerError::HttpStatus {
                    issue: issue.clone(),
                    status: 404,
                })
            })
    }
}
