//! Then steps for known-issue guard BDD scenarios.

use std::sync::atomic::Ordering;

use super::world::KnownIssueWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use work_to_rule::{
    issue::domain::IssueId,
    known_issue::domain::{DecisionError, Verdict},
};

fn last_result(world: &KnownIssueWorld) -> Result<&Result<Verdict, DecisionError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing evaluation result in scenario world"))
}

#[then(r#"the outcome is an expected failure justified by "{issue}""#)]
fn expected_failure_justified_by(
    world: &KnownIssueWorld,
    issue: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let Ok(Verdict::ExpectedFailure { open_issues, .. }) = result else {
        return Err(eyre::eyre!("expected known-issue failure, got {result:?}"));
    };
    let id = IssueId::new(issue).wrap_err("construct issue identifier")?;
    eyre::ensure!(
        open_issues.contains(&id),
        "expected {id} among open issues {open_issues:?}"
    );
    Ok(())
}

#[then("the outcome is a stale annotation")]
fn outcome_is_stale_annotation(world: &KnownIssueWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(result, Err(DecisionError::StaleAnnotation { .. })),
        "expected stale annotation, got {result:?}"
    );
    Ok(())
}

#[then("the outcome is a no-open-issues failure")]
fn outcome_is_no_open_issues(world: &KnownIssueWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(result, Err(DecisionError::NoOpenIssues { .. })),
        "expected no-open-issues failure, got {result:?}"
    );
    Ok(())
}

#[then("the test body did not run")]
fn body_did_not_run(world: &KnownIssueWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.body_ran.load(Ordering::SeqCst),
        "test body ran although no open issue justified it"
    );
    Ok(())
}

#[then(r#"the outcome is a resolution failure naming "{issue}""#)]
fn outcome_is_resolution_failure(
    world: &KnownIssueWorld,
    issue: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let Err(error @ DecisionError::ResolutionFailure { .. }) = result else {
        return Err(eyre::eyre!("expected resolution failure, got {result:?}"));
    };
    let message = error.to_string();
    eyre::ensure!(
        message.contains(&issue),
        "resolution failure message '{message}' does not name {issue}"
    );
    Ok(())
}

#[then(r#"issue "{issue}" was looked up once"#)]
fn issue_looked_up_once(world: &KnownIssueWorld, issue: String) -> Result<(), eyre::Report> {
    let id = IssueId::new(issue).wrap_err("construct issue identifier")?;
    let lookups = world.tracker.lookups(&id).wrap_err("read lookup count")?;
    eyre::ensure!(lookups == 1, "expected one lookup of {id}, saw {lookups}");
    Ok(())
}

#[then("the test passes through")]
fn test_passes_through(world: &KnownIssueWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(result, Ok(Verdict::PassedThrough)),
        "expected pass-through, got {result:?}"
    );
    Ok(())
}
