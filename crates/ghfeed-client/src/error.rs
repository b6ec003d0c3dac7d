//! Error types for the GitHub client.

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// GitHub client error types.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The username is not a GitHub login (ASCII alphanumerics and `-`).
    #[error("invalid GitHub username: {0:?}")]
    InvalidUsername(String),

    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or the response could not be read.
    #[error("failed to fetch events from {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The user does not exist.
    #[error("GitHub user not found: {username}")]
    UserNotFound { username: String },

    /// The API answered with an unexpected status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body is not an event list.
    #[error("failed to decode events from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
