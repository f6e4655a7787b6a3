//! Unit tests for known-issue decisions.

mod descriptor_tests;
mod error_tests;
