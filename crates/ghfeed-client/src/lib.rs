//! GitHub Events API client for ghfeed.
//!
//! Fetches a user's public event feed in a single request. Pagination,
//! authentication and rate-limit handling are out of scope.

mod client;
mod error;

pub use client::GitHubClient;
pub use error::{ClientError, ClientResult};
