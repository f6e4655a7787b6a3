//! When steps for known-issue guard BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::world::{KnownIssueWorld, run_async};
use rstest_bdd_macros::when;
use work_to_rule::known_issue::domain::TestFailure;

fn run_test(world: &mut KnownIssueWorld, passes: bool) -> Result<(), eyre::Report> {
    let test = world
        .test
        .clone()
        .ok_or_else(|| eyre::eyre!("missing test descriptor in scenario world"))?;
    let body_ran = Arc::clone(&world.body_ran);
    let result = run_async(world.rule.evaluate(&test, || async move {
        body_ran.store(true, Ordering::SeqCst);
        if passes {
            Ok(())
        } else {
            Err(TestFailure::assertion("behaviour not implemented yet"))
        }
    }));
    world.last_result = Some(result);
    Ok(())
}

#[when("the test runs and fails")]
fn test_runs_and_fails(world: &mut KnownIssueWorld) -> Result<(), eyre::Report> {
    run_test(world, false)
}

#[when("the test runs and passes")]
fn test_runs_and_passes(world: &mut KnownIssueWorld) -> Result<(), eyre::Report> {
    run_test(world, true)
}

#[when("the test runs twice and fails")]
fn test_runs_twice_and_fails(world: &mut KnownIssueWorld) -> Result<(), eyre::Report> {
    run_test(world, false)?;
    run_test(world, false)
}
