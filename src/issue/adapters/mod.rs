//! Adapter implementations for the issue tracker port.

pub mod cache;
pub mod http;
pub mod memory;

pub use cache::CachingIssueTracker;
pub use http::JsonHttpIssueTracker;
pub use memory::InMemoryIssueTracker;
