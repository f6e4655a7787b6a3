//! Configuration surface for JSON-over-HTTP issue trackers.

use super::{IssueDomainError, JsonFieldPredicate, UrlTemplate};
use serde::{Deserialize, Serialize};

const DEFAULT_ACCEPTED_CONTENT_TYPE: &str = "application/json";
const GITHUB_ACCEPTED_CONTENT_TYPE: &str = "application/vnd.github+json";

fn default_accepted_content_type() -> String {
    DEFAULT_ACCEPTED_CONTENT_TYPE.to_owned()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned()
}

/// Everything needed to ask one tracker whether an issue is open.
///
/// Configuration can be written as TOML:
///
/// ```toml
/// url_template = "https://api.github.com/repos/owner/repo/issues/{{ id }}"
/// accepted_content_type = "application/vnd.github+json"
///
/// [is_open]
/// field = "state"
/// expected = "open"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTrackerConfig {
    url_template: UrlTemplate,
    #[serde(default = "default_accepted_content_type")]
    accepted_content_type: String,
    is_open: JsonFieldPredicate,
    #[serde(default = "default_user_agent")]
    user_agent: String,
}

impl IssueTrackerConfig {
    /// Creates a configuration accepting `application/json`.
    #[must_use]
    pub fn new(url_template: UrlTemplate, is_open: JsonFieldPredicate) -> Self {
        Self {
            url_template,
            accepted_content_type: default_accepted_content_type(),
            is_open,
            user_agent: default_user_agent(),
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidConfig`] when the document is not
    /// valid TOML, lacks required keys, or carries an invalid URL template.
    pub fn from_toml_str(source: &str) -> Result<Self, IssueDomainError> {
        toml::from_str(source).map_err(|error| IssueDomainError::InvalidConfig(error.to_string()))
    }

    /// Issues of a GitHub repository, addressed by issue number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidUrlTemplate`] when the owner or
    /// repository name cannot form a URL.
    pub fn github(owner: &str, repository: &str) -> Result<Self, IssueDomainError> {
        let template = UrlTemplate::new(format!(
            "https://api.github.com/repos/{}/{}/issues/{{{{ id }}}}",
            owner.trim(),
            repository.trim()
        ))?;
        Ok(Self::new(template, JsonFieldPredicate::github())
            .with_accepted_content_type(GITHUB_ACCEPTED_CONTENT_TYPE))
    }

    /// Issues of a gitlab.com project, addressed by project-scoped issue IID.
    ///
    /// `project_path` is the `group/project` path; it is URL-encoded here.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidUrlTemplate`] when the project
    /// path cannot form a URL.
    pub fn gitlab(project_path: &str) -> Result<Self, IssueDomainError> {
        let encoded = project_path.trim().replace('/', "%2F");
        let template = UrlTemplate::new(format!(
            "https://gitlab.com/api/v4/projects/{encoded}/issues/{{{{ id }}}}"
        ))?;
        Ok(Self::new(template, JsonFieldPredicate::gitlab()))
    }

    /// Issues of a Jira instance, addressed by issue key.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidUrlTemplate`] when `base_url` is
    /// not an absolute HTTP(S) URL.
    pub fn jira(base_url: &str) -> Result<Self, IssueDomainError> {
        let template = UrlTemplate::new(format!(
            "{}/rest/api/2/issue/{{{{ id }}}}",
            base_url.trim().trim_end_matches('/')
        ))?;
        Ok(Self::new(template, JsonFieldPredicate::jira()))
    }

    /// Sets the media type sent in the `Accept` header.
    #[must_use]
    pub fn with_accepted_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.accepted_content_type = content_type.into();
        self
    }

    /// Sets the client identifier sent in the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the URL template.
    #[must_use]
    pub const fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    /// Returns the media type sent in the `Accept` header.
    #[must_use]
    pub fn accepted_content_type(&self) -> &str {
        &self.accepted_content_type
    }

    /// Returns the "is open" rule.
    #[must_use]
    pub const fn is_open(&self) -> &JsonFieldPredicate {
        &self.is_open
    }

    /// Returns the client identifier sent in the `User-Agent` header.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
