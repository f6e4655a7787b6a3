//! Step definitions for known-issue guard scenarios.

pub mod world;

mod given;
mod then;
mod when;
