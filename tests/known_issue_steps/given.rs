//! Given steps for known-issue guard BDD scenarios.

use super::world::KnownIssueWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use work_to_rule::{
    issue::domain::{IssueId, IssueStatus},
    known_issue::domain::TestDescriptor,
};

fn record_status(
    world: &KnownIssueWorld,
    issue: &str,
    status: IssueStatus,
) -> Result<(), eyre::Report> {
    let id = IssueId::new(issue).wrap_err("construct issue identifier")?;
    world
        .tracker
        .set_status(id, status)
        .wrap_err("record issue status")?;
    Ok(())
}

#[given(r#"issue "{issue}" is open"#)]
fn issue_is_open(world: &mut KnownIssueWorld, issue: String) -> Result<(), eyre::Report> {
    record_status(world, &issue, IssueStatus::Open)
}

#[given(r#"issue "{issue}" is closed"#)]
fn issue_is_closed(world: &mut KnownIssueWorld, issue: String) -> Result<(), eyre::Report> {
    record_status(world, &issue, IssueStatus::Closed)
}

#[given(r#"a test annotated with issue "{issue}""#)]
fn test_annotated_with_issue(
    world: &mut KnownIssueWorld,
    issue: String,
) -> Result<(), eyre::Report> {
    let id = IssueId::new(issue).wrap_err("construct issue identifier")?;
    world.test = Some(TestDescriptor::new("scenario test").with_issue(id));
    Ok(())
}

#[given("a test without issue annotations")]
fn test_without_annotations(world: &mut KnownIssueWorld) {
    world.test = Some(TestDescriptor::new("scenario test"));
}
