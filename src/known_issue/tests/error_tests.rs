//! Tests for decision error classification and messages.

use crate::issue::{domain::IssueId, ports::IssueTrackerError};
use crate::known_issue::domain::{DecisionError, TestFailure};
use rstest::rstest;
use std::collections::BTreeSet;

fn ids(values: &[&str]) -> BTreeSet<IssueId> {
    values
        .iter()
        .map(|value| IssueId::new(*value).expect("valid issue id"))
        .collect()
}

#[rstest]
fn no_open_issues_message_lists_issues() {
    let error = DecisionError::NoOpenIssues {
        issues: ids(&["B-2", "A-1"]),
    };
    assert_eq!(
        error.to_string(),
        "test annotated as in progress, but no open issues found among A-1, B-2"
    );
    assert!(error.is_annotation_error());
    assert!(!error.is_skip());
}

#[rstest]
fn stale_annotation_message_lists_open_issues() {
    let error = DecisionError::StaleAnnotation {
        open_issues: ids(&["A-1"]),
    };
    assert_eq!(
        error.to_string(),
        "test passed while annotated as in progress on A-1"
    );
    assert!(error.is_annotation_error());
}

#[rstest]
fn resolution_failure_names_issue_and_cause() {
    let error = DecisionError::from(IssueTrackerError::HttpStatus {
        issue: IssueId::new("X-1").expect("valid issue id"),
        status: 404,
    });
    let message = error.to_string();
    assert!(message.contains("X-1"), "{message}");
    assert!(message.contains("404"), "{message}");
    assert!(!error.is_annotation_error());
}

#[rstest]
fn propagated_failures_keep_their_message() {
    let skipped = DecisionError::Propagated(TestFailure::skipped("no database"));
    assert!(skipped.is_skip());
    assert_eq!(skipped.to_string(), "test skipped: no database");

    let failed = DecisionError::Propagated(TestFailure::assertion("1 != 2"));
    assert!(!failed.is_skip());
    assert_eq!(failed.to_string(), "assertion failed: 1 != 2");
}
