//! Failure signals raised by a test body.

use std::sync::Arc;
use thiserror::Error;

/// Why a test body did not pass.
///
/// A skip signal raised by the body (an unmet assumption, a disabled
/// environment) is kept apart from a genuine failure so that known-issue
/// handling never turns one into the other.
#[derive(Debug, Clone, Error)]
pub enum TestFailure {
    /// The body asked to be skipped.
    #[error("test skipped: {reason}")]
    AlreadySkipped {
        /// Reason given for the skip.
        reason: String,
    },

    /// The body failed an assertion or returned an error.
    #[error("{0}")]
    Ordinary(Arc<dyn std::error::Error + Send + Sync>),
}

impl TestFailure {
    /// Signals that the test skipped itself.
    #[must_use]
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::AlreadySkipped {
            reason: reason.into(),
        }
    }

    /// Wraps an error raised by the test body.
    pub fn ordinary(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Ordinary(Arc::new(err))
    }

    /// Reports a failed assertion with a message.
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::ordinary(AssertionFailed(message.into()))
    }

    /// Returns `true` for [`TestFailure::AlreadySkipped`].
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::AlreadySkipped { .. })
    }
}

#[derive(Debug, Error)]
#[error("assertion failed: {0}")]
struct AssertionFailed(String);
