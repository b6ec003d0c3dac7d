//! Raw event type as returned by the GitHub Events API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Type-specific payload of an event.
pub type Payload = Map<String, Value>;

/// The repository an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Full repository name (`owner/name`).
    pub name: String,
}

/// A single public timeline event, before dispatch.
///
/// Only the fields ghfeed cares about are kept; everything else in the API
/// response is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The event ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The declared event type (`PushEvent`, `IssuesEvent`, ...).
    pub r#type: String,

    /// The repository the event happened in.
    pub repo: RepoRef,

    /// The type-specific payload. Missing or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payload: Payload,

    /// When the event was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RawEvent {
    /// Creates a new raw event with an empty payload.
    #[must_use]
    pub fn new(r#type: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            id: None,
            r#type: r#type.into(),
            repo: RepoRef {
                name: repo_name.into(),
            },
            payload: Payload::new(),
            created_at: None,
        }
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the event ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }

    /// Returns a payload field, if present.
    #[must_use]
    pub fn payload_field(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Payload, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Payload>::deserialize(deserializer)?.unwrap_or_default())
}
