//! Issue tracker port: resolve an identifier to its current status.

use crate::issue::domain::{IssueId, IssueStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker lookups.
pub type IssueTrackerResult<T> = Result<T, IssueTrackerError>;

/// Status lookup contract.
///
/// A single call performs at most one lookup against the backing tracker;
/// implementations do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Returns whether the issue is currently open or closed.
    ///
    /// # Errors
    ///
    /// Returns an [`IssueTrackerError`] when the tracker cannot be reached
    /// or its answer cannot be interpreted.
    async fn status(&self, issue: &IssueId) -> IssueTrackerResult<IssueStatus>;
}

#[async_trait]
impl<T> IssueTracker for Arc<T>
where
    T: IssueTracker + ?Sized,
{
    async fn status(&self, issue: &IssueId) -> IssueTrackerResult<IssueStatus> {
        (**self).status(issue).await
    }
}

/// Errors returned while resolving an issue's status.
///
/// Values are cheap to clone and compare so that a cached failure can be
/// handed to every later caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueTrackerError {
    /// The tracker answered with a status code of 300 or above.
    #[error("request for issue {issue} failed with HTTP status {status}")]
    HttpStatus {
        /// Issue being resolved.
        issue: IssueId,
        /// Response status code.
        status: u16,
    },

    /// The `Content-Type` header is present but unusable.
    #[error("response for issue {issue} has unusable content type '{content_type}'")]
    BadContentType {
        /// Issue being resolved.
        issue: IssueId,
        /// Header value as received.
        content_type: String,
    },

    /// The body could not be decoded as JSON.
    #[error("response for issue {issue} is not valid JSON: {reason}")]
    BadJson {
        /// Issue being resolved.
        issue: IssueId,
        /// Decoder diagnostic.
        reason: String,
    },

    /// The request failed before a response status was received.
    #[error("request for issue {issue} failed: {reason}")]
    Transport {
        /// Issue being resolved.
        issue: IssueId,
        /// Transport diagnostic.
        reason: String,
    },

    /// No usable request URL could be built for the issue.
    #[error("cannot build request URL for issue {issue}: {reason}")]
    InvalidUrl {
        /// Issue being resolved.
        issue: IssueId,
        /// URL scheme diagnostic.
        reason: String,
    },
}

impl IssueTrackerError {
    /// Returns the issue whose resolution failed.
    #[must_use]
    pub const fn issue(&self) -> &IssueId {
        match self {
            Self::HttpStatus { issue, .. }
            | Self::BadContentType { issue, .. }
            | Self::BadJson { issue, .. }
            | Self::Transport { issue, .. }
            | Self::InvalidUrl { issue, .. } => issue,
        }
    }
}
