//! Error types for issue domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing issue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The issue identifier is empty after trimming.
    #[error("issue identifier must not be empty")]
    EmptyIssueId,

    /// The URL template cannot produce an absolute HTTP(S) URL.
    #[error("invalid issue URL template '{template}': {reason}")]
    InvalidUrlTemplate {
        /// Template source as supplied.
        template: String,
        /// Why the template was rejected.
        reason: String,
    },

    /// A URL scheme could not produce a usable URL for an issue.
    #[error("cannot build URL for issue {issue}: {reason}")]
    InvalidIssueUrl {
        /// Issue the URL was requested for.
        issue: String,
        /// Why no URL could be produced.
        reason: String,
    },

    /// The tracker configuration document could not be parsed.
    #[error("invalid issue tracker configuration: {0}")]
    InvalidConfig(String),
}

/// Error returned while parsing an issue status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseIssueStatusError(pub String);
