//! Domain model for issue-status resolution.
//!
//! Issue identifiers, the two-valued status classification, and the
//! vendor-specific rules that turn a tracker's JSON document and URL layout
//! into a status. Nothing here performs I/O.

mod config;
mod error;
mod ids;
mod predicate;
mod status;
mod url_scheme;

pub use config::IssueTrackerConfig;
pub use error::{IssueDomainError, ParseIssueStatusError};
pub use ids::IssueId;
pub use predicate::{FieldMatch, IssueJsonPredicate, JsonFieldPredicate};
pub use status::IssueStatus;
pub use url_scheme::{IssueUrlScheme, UrlTemplate};
