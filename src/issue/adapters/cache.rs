//! Process-lifetime memoization of issue status lookups.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::issue::{
    domain::{IssueId, IssueStatus},
    ports::{IssueTracker, IssueTrackerResult},
};

type CachedStatus = Arc<OnceCell<IssueTrackerResult<IssueStatus>>>;

/// Decorator that resolves each issue at most once for its own lifetime.
///
/// The first caller for an identifier performs the lookup; callers arriving
/// while that lookup is in flight wait for it and receive the same result.
/// Failures are memoized exactly like successes, so a tracker outage seen
/// once is reported for every later lookup of that identifier instead of
/// being retried. Entries are never evicted.
///
/// Distinct identifiers only share the short critical section that finds or
/// creates their slot; lookups themselves run concurrently.
#[derive(Debug)]
pub struct CachingIssueTracker<T>
where
    T: IssueTracker,
{
    inner: T,
    entries: Mutex<HashMap<IssueId, CachedStatus>>,
}

impl<T> CachingIssueTracker<T>
where
    T: IssueTracker,
{
    /// Wraps a tracker with an empty cache.
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            entries: Mutex::default(),
        }
    }

    /// Returns the wrapped tracker.
    #[must_use]
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the memoized result for an issue without triggering a lookup.
    ///
    /// Returns `None` while the issue has never been resolved or its first
    /// lookup is still in flight.
    #[must_use]
    pub fn cached(&self, issue: &IssueId) -> Option<IssueTrackerResult<IssueStatus>> {
        self.lock_entries()
            .get(issue)
            .and_then(|slot| slot.get().cloned())
    }

    /// Returns the number of issues with a slot in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Returns `true` when no issue has been requested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    fn slot(&self, issue: &IssueId) -> CachedStatus {
        Arc::clone(self.lock_entries().entry(issue.clone()).or_default())
    }

    // Slots are inserted whole, so the map stays consistent after a panic
    // elsewhere while the lock was held.
    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<IssueId, CachedStatus>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<T> IssueTracker for CachingIssueTracker<T>
where
    T: IssueTracker,
{
    async fn status(&self, issue: &IssueId) -> IssueTrackerResult<IssueStatus> {
        let slot = self.slot(issue);
        if let Some(result) = slot.get() {
            debug!(issue = %issue, "issue status served from cache");
            return result.clone();
        }

        slot.get_or_init(|| async {
            debug!(issue = %issue, "resolving issue status");
            let result = self.inner.status(issue).await;
            match &result {
                Ok(status) => debug!(issue = %issue, %status, "issue status resolved"),
                Err(error) => warn!(issue = %issue, %error, "issue status lookup failed"),
            }
            result
        })
        .await
        .clone()
    }
}
