//! Domain model for known-issue decisions.
//!
//! Test and suite descriptors carry the issues a test is annotated with;
//! failures and verdicts describe what the decision engine concluded.

mod descriptor;
mod error;
mod failure;
mod verdict;

pub use descriptor::{HasIssueIds, SuiteDescriptor, TestDescriptor};
pub use error::DecisionError;
pub use failure::TestFailure;
pub use verdict::Verdict;
