//! Application services for known-issue decisions.

mod rule;

pub use rule::KnownIssueRule;
