//! Work-to-rule: known-issue guards for automated tests.
//!
//! A test can be marked as failing because of an open issue in an external
//! tracker. At run time the guard asks the tracker whether the issue is
//! still open and decides whether the failure is expected, or whether the
//! annotation has gone stale and must fail the run.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure decision and classification logic with no I/O
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, caching, memory)
//!
//! # Modules
//!
//! - [`issue`]: Issue-status resolution against external trackers
//! - [`known_issue`]: Decision engine for tests annotated with issues

pub mod issue;
pub mod known_issue;
