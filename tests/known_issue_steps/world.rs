//! Shared world state for known-issue guard BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use rstest::fixture;
use work_to_rule::{
    issue::adapters::{CachingIssueTracker, InMemoryIssueTracker},
    known_issue::{
        domain::{DecisionError, TestDescriptor, Verdict},
        services::KnownIssueRule,
    },
};

/// Rule type used by the BDD world.
pub type TestRule = KnownIssueRule<CachingIssueTracker<InMemoryIssueTracker>>;

/// Scenario world for known-issue guard behaviour tests.
pub struct KnownIssueWorld {
    pub tracker: InMemoryIssueTracker,
    pub rule: TestRule,
    pub test: Option<TestDescriptor>,
    pub body_ran: Arc<AtomicBool>,
    pub last_result: Option<Result<Verdict, DecisionError>>,
}

impl KnownIssueWorld {
    /// Creates a world whose rule caches lookups against an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        let tracker = InMemoryIssueTracker::new();
        let rule = KnownIssueRule::new(Arc::new(CachingIssueTracker::new(tracker.clone())));
        Self {
            tracker,
            rule,
            test: None,
            body_ran: Arc::new(AtomicBool::new(false)),
            last_result: None,
        }
    }
}

impl Default for KnownIssueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KnownIssueWorld {
    KnownIssueWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
