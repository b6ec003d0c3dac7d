//! Supported event kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EventError;

/// An event kind ghfeed knows how to render.
///
/// Serialized as the GitHub event type string (e.g. `"PushEvent"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "PushEvent")]
    Push,
    #[serde(rename = "IssuesEvent")]
    Issues,
    #[serde(rename = "WatchEvent")]
    Watch,
    #[serde(rename = "CommitCommentEvent")]
    CommitComment,
    #[serde(rename = "CreateEvent")]
    Create,
    #[serde(rename = "DeleteEvent")]
    Delete,
}

impl EventKind {
    /// All supported kinds.
    pub const ALL: [Self; 6] = [
        Self::Push,
        Self::Issues,
        Self::Watch,
        Self::CommitComment,
        Self::Create,
        Self::Delete,
    ];

    /// Returns the GitHub event type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "PushEvent",
            Self::Issues => "IssuesEvent",
            Self::Watch => "WatchEvent",
            Self::CommitComment => "CommitCommentEvent",
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EventError::UnsupportedEventKind(s.to_string()))
    }
}
