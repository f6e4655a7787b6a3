//! Port contracts for issue-status resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by the known-issue
//! decision engine.

pub mod tracker;

pub use tracker::{IssueTracker, IssueTrackerError, IssueTrackerResult};

#[cfg(test)]
pub use tracker::MockIssueTracker;
