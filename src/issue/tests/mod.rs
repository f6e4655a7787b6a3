//! Unit tests for issue-status resolution.
