//! Issue-status resolution for known-issue test guards.
//!
//! This module answers a single question, "is issue X still open?", for the
//! decision engine in [`crate::known_issue`]. It follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`], including the JSON-over-HTTP
//!   tracker client and the process-lifetime caching decorator

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
