//! JSON-over-HTTP issue tracker client.

mod body;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::CachingIssueTracker;
use crate::issue::{
    domain::{IssueId, IssueJsonPredicate, IssueStatus, IssueTrackerConfig, IssueUrlScheme},
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};

/// Resolves issue status by fetching the issue's JSON document over HTTP.
///
/// Each lookup sends one `GET` with the configured `Accept` and `User-Agent`
/// headers and applies the configured predicate to the decoded body. No
/// retries or timeouts are applied here; supply a configured
/// [`reqwest::Client`] through [`JsonHttpIssueTracker::with_client`] or wrap
/// calls in `tokio::time::timeout` when a deadline is needed.
#[derive(Clone)]
pub struct JsonHttpIssueTracker {
    client: Client,
    url_scheme: Arc<dyn IssueUrlScheme>,
    accepted_content_type: String,
    user_agent: String,
    is_open: Arc<dyn IssueJsonPredicate>,
}

impl JsonHttpIssueTracker {
    /// Creates a client from its three collaborators.
    #[must_use]
    pub fn new(
        url_scheme: impl IssueUrlScheme + 'static,
        accepted_content_type: impl Into<String>,
        is_open: impl IssueJsonPredicate + 'static,
    ) -> Self {
        Self {
            client: Client::new(),
            url_scheme: Arc::new(url_scheme),
            accepted_content_type: accepted_content_type.into(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_owned(),
            is_open: Arc::new(is_open),
        }
    }

    /// Creates a client from a tracker configuration.
    #[must_use]
    pub fn from_config(config: &IssueTrackerConfig) -> Self {
        Self::new(
            config.url_template().clone(),
            config.accepted_content_type(),
            config.is_open().clone(),
        )
        .with_user_agent(config.user_agent())
    }

    /// Replaces the underlying HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the client identifier sent in the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Wraps this client so each issue is fetched at most once per process.
    #[must_use]
    pub fn cached(self) -> CachingIssueTracker<Self> {
        CachingIssueTracker::new(self)
    }

    async fn fetch_document(&self, issue: &IssueId) -> IssueTrackerResult<Value> {
        let url = self
            .url_scheme
            .url_for(issue)
            .map_err(|error| IssueTrackerError::InvalidUrl {
                issue: issue.clone(),
                reason: error.to_string(),
            })?;

        debug!(issue = %issue, %url, "requesting issue document");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, &self.accepted_content_type)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|error| IssueTrackerError::Transport {
                issue: issue.clone(),
                reason: error.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 300 {
            debug!(issue = %issue, status, "issue tracker rejected request");
            return Err(IssueTrackerError::HttpStatus {
                issue: issue.clone(),
                status,
            });
        }

        let encoding = body::charset(issue, response.headers().get(CONTENT_TYPE))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|error| IssueTrackerError::Transport {
                issue: issue.clone(),
                reason: error.to_string(),
            })?;
        body::decode_json(issue, encoding, &bytes)
    }
}

#[async_trait]
impl IssueTracker for JsonHttpIssueTracker {
    async fn status(&self, issue: &IssueId) -> IssueTrackerResult<IssueStatus> {
        let document = self.fetch_document(issue).await?;
        Ok(self.is_open.status_of(&document))
    }
}

impl std::fmt::Debug for JsonHttpIssueTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonHttpIssueTracker")
            .field("accepted_content_type", &self.accepted_content_type)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
