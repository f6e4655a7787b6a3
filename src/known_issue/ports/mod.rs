//! Port contracts for known-issue decisions.

pub mod associated;

pub use associated::{AssociatedIssues, NoAssociatedIssues};
