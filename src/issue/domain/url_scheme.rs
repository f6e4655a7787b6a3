//! Mapping from issue identifiers to tracker API URLs.

use super::{IssueDomainError, IssueId};
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use url::Url;

/// Produces the API URL that describes an issue.
pub trait IssueUrlScheme: Send + Sync {
    /// Returns the URL of the issue's JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidIssueUrl`] when no valid URL can be
    /// built for the identifier.
    fn url_for(&self, issue: &IssueId) -> Result<Url, IssueDomainError>;
}

impl<F> IssueUrlScheme for F
where
    F: Fn(&IssueId) -> Result<Url, IssueDomainError> + Send + Sync,
{
    fn url_for(&self, issue: &IssueId) -> Result<Url, IssueDomainError> {
        self(issue)
    }
}

/// `minijinja` template rendering an issue URL from `{{ id }}`.
///
/// ```
/// use work_to_rule::issue::domain::{IssueId, IssueUrlScheme, UrlTemplate};
///
/// let template = UrlTemplate::new("https://tracker.example/rest/issue/{{ id }}")
///     .expect("valid template");
/// let issue = IssueId::new("PROJ-7").expect("valid id");
/// let url = template.url_for(&issue).expect("renderable");
/// assert_eq!(url.as_str(), "https://tracker.example/rest/issue/PROJ-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlTemplate(String);

impl UrlTemplate {
    const PROBE_ID: &'static str = "PROBE-1";

    /// Creates a template after checking that it renders to an absolute
    /// `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidUrlTemplate`] when the template
    /// does not compile or does not render to a usable URL.
    pub fn new(source: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = source.into();
        let template = Self(raw.trim().to_owned());
        template
            .render(Self::PROBE_ID)
            .map_err(|reason| IssueDomainError::InvalidUrlTemplate {
                template: raw,
                reason,
            })?;
        Ok(template)
    }

    /// Returns the template source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn render(&self, id: &str) -> Result<Url, String> {
        let rendered = Environment::new()
            .render_str(&self.0, context! { id => id })
            .map_err(|error| error.to_string())?;
        let url = Url::parse(rendered.trim()).map_err(|error| error.to_string())?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(format!("unsupported URL scheme '{other}'")),
        }
    }
}

impl IssueUrlScheme for UrlTemplate {
    fn url_for(&self, issue: &IssueId) -> Result<Url, IssueDomainError> {
        self.render(issue.as_str())
            .map_err(|reason| IssueDomainError::InvalidIssueUrl {
                issue: issue.to_string(),
                reason,
            })
    }
}

impl TryFrom<String> for UrlTemplate {
    type Error = IssueDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UrlTemplate> for String {
    fn from(value: UrlTemplate) -> Self {
        value.0
    }
}
