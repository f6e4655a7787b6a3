//! Tests for issue annotation inheritance.

use crate::issue::domain::IssueId;
use crate::known_issue::domain::{HasIssueIds, SuiteDescriptor, TestDescriptor};
use rstest::rstest;
use std::collections::BTreeSet;
use std::sync::Arc;

fn ids(values: &[&str]) -> BTreeSet<IssueId> {
    values
        .iter()
        .map(|value| IssueId::new(*value).expect("valid issue id"))
        .collect()
}

#[rstest]
fn unannotated_test_has_no_issues() {
    let test = TestDescriptor::new("plain");
    assert!(test.issue_ids().is_empty());
    assert_eq!(test.ancestors().count(), 0);
}

#[rstest]
fn test_inherits_issues_from_every_enclosing_suite() {
    let base = Arc::new(SuiteDescriptor::new("base").with_issues(ids(&["BASE-1"])));
    let derived = Arc::new(
        SuiteDescriptor::new("derived")
            .extending(base)
            .with_issues(ids(&["MID-1", "MID-2"])),
    );
    let test = TestDescriptor::new("case")
        .in_suite(derived)
        .with_issues(ids(&["OWN-1"]));

    assert_eq!(
        test.issue_ids(),
        ids(&["BASE-1", "MID-1", "MID-2", "OWN-1"])
    );
    let ancestry: Vec<&str> = test.ancestors().map(SuiteDescriptor::name).collect();
    assert_eq!(ancestry, vec!["derived", "base"]);
}

#[rstest]
fn duplicate_annotations_collapse() {
    let suite = Arc::new(SuiteDescriptor::new("suite").with_issues(ids(&["DUP-1"])));
    let test = TestDescriptor::new("case")
        .in_suite(suite)
        .with_issues(ids(&["DUP-1"]));

    assert_eq!(test.issue_ids(), ids(&["DUP-1"]));
}

#[rstest]
fn suites_expose_their_own_inherited_issues() {
    let base = Arc::new(SuiteDescriptor::new("base").with_issues(ids(&["BASE-1"])));
    let derived = SuiteDescriptor::new("derived").extending(base);

    assert!(derived.declared_issue_ids().is_empty());
    assert_eq!(derived.issue_ids(), ids(&["BASE-1"]));
}
