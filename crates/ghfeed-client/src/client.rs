//! HTTP access to the GitHub Events API.

use ghfeed_config::GitHubConfig;
use ghfeed_event::RawEvent;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::{ClientError, ClientResult};

const DEFAULT_USER_AGENT: &str = concat!("ghfeed/", env!("CARGO_PKG_VERSION"));

/// Client for a user's public event feed.
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Creates a new client from the `[github]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(
                config
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::ClientBuild)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the events URL for a user.
    #[must_use]
    pub fn events_url(&self, username: &str) -> String {
        format!("{}/users/{username}/events", self.api_url)
    }

    /// Fetches the first page of a user's public events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username is not a valid GitHub login
    /// - The user does not exist
    /// - The request fails or the API answers with a non-success status
    /// - The body is not a JSON event list
    pub async fn fetch_user_events(&self, username: &str) -> ClientResult<Vec<RawEvent>> {
        let username = username.trim();
        if !is_valid_login(username) {
            return Err(ClientError::InvalidUsername(username.to_string()));
        }

        let url = self.events_url(username);
        debug!(%url, "fetching events");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| ClientError::Request {
                    url: url.clone(),
                    source: e,
                })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::UserNotFound {
                username: username.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus { url, status });
        }

        let events: Vec<RawEvent> =
            response
                .json()
                .await
                .map_err(|e| ClientError::Decode {
                    url: url.clone(),
                    source: e,
                })?;

        info!(username, count = events.len(), "fetched events");
        Ok(events)
    }
}

/// GitHub logins are ASCII alphanumerics and hyphens. Anything else could
/// change the request path (`..`, `/`) or the query (`?`, `#`).
fn is_valid_login(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
