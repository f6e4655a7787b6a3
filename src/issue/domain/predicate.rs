//! Rules that classify a tracker's JSON issue document as open or closed.

use super::IssueStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classifies a parsed issue document.
///
/// Implementations must not fail: a document that lacks the information
/// they look for maps to a fixed status instead.
pub trait IssueJsonPredicate: Send + Sync {
    /// Returns the status the document describes.
    fn status_of(&self, document: &Value) -> IssueStatus;
}

impl<F> IssueJsonPredicate for F
where
    F: Fn(&Value) -> IssueStatus + Send + Sync,
{
    fn status_of(&self, document: &Value) -> IssueStatus {
        self(document)
    }
}

/// How a field's value is compared with the expected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMatch {
    /// The issue is open when the field equals the expected value.
    #[default]
    Equals,
    /// The issue is open when the field differs from the expected value.
    NotEquals,
}

/// Vendor-configurable "is open" rule over a single JSON field.
///
/// `field` is a JSON Pointer (`/fields/status/name`). A bare key such as
/// `state` addresses the top-level member of that name. When the field is
/// absent the rule yields `when_absent`, which defaults to
/// [`IssueStatus::Closed`] so that a document the rule does not understand
/// never keeps a failing test quiet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFieldPredicate {
    field: String,
    expected: Value,
    #[serde(default)]
    matcher: FieldMatch,
    #[serde(default = "closed")]
    when_absent: IssueStatus,
}

const fn closed() -> IssueStatus {
    IssueStatus::Closed
}

impl JsonFieldPredicate {
    /// Open when `field` equals `expected`.
    #[must_use]
    pub fn equals(field: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            matcher: FieldMatch::Equals,
            when_absent: IssueStatus::Closed,
        }
    }

    /// Open when `field` is present and differs from `expected`.
    #[must_use]
    pub fn not_equals(field: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            matcher: FieldMatch::NotEquals,
            ..Self::equals(field, expected)
        }
    }

    /// Overrides the status reported when the field is missing.
    #[must_use]
    pub const fn when_absent(mut self, status: IssueStatus) -> Self {
        self.when_absent = status;
        self
    }

    /// GitHub REST issues: `state` is `"open"` or `"closed"`.
    #[must_use]
    pub fn github() -> Self {
        Self::equals("state", "open")
    }

    /// GitLab REST issues: `state` is `"opened"` or `"closed"`.
    #[must_use]
    pub fn gitlab() -> Self {
        Self::equals("state", "opened")
    }

    /// Jira REST issues: unresolved issues carry `"resolution": null`.
    #[must_use]
    pub fn jira() -> Self {
        Self::equals("/fields/resolution", Value::Null)
    }

    /// Returns the configured field selector.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the configured expected value.
    #[must_use]
    pub const fn expected(&self) -> &Value {
        &self.expected
    }

    /// Returns the configured comparison.
    #[must_use]
    pub const fn matcher(&self) -> FieldMatch {
        self.matcher
    }

    /// Evaluates the rule against a parsed document.
    #[must_use]
    pub fn evaluate(&self, document: &Value) -> IssueStatus {
        let Some(actual) = document.pointer(&json_pointer(&self.field)) else {
            return self.when_absent;
        };
        let matches = *actual == self.expected;
        let open = match self.matcher {
            FieldMatch::Equals => matches,
            FieldMatch::NotEquals => !matches,
        };
        if open {
            IssueStatus::Open
        } else {
            IssueStatus::Closed
        }
    }
}

impl IssueJsonPredicate for JsonFieldPredicate {
    fn status_of(&self, document: &Value) -> IssueStatus {
        self.evaluate(document)
    }
}

fn json_pointer(field: &str) -> String {
    if field.is_empty() || field.starts_with('/') {
        return field.to_owned();
    }
    format!("/{}", field.replace('~', "~0").replace('/', "~1"))
}
