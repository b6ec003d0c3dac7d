//! Typed events and their formatters.

use std::fmt;

use ghfeed_event::RawEvent;
use serde_json::Value;

use crate::dispatch::lookup;
use crate::{EventError, EventKind, EventResult, plural};

/// A typed view over a [`RawEvent`], holding only what its formatter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    /// Commits pushed to a branch.
    Push { repo: String, commits: u64 },

    /// An issue was opened, closed, reopened, ...
    Issues { repo: String, action: String },

    /// A repository was starred.
    Watch { repo: String },

    /// A commit was commented on.
    CommitComment { repo: String },

    /// A branch, tag or repository was created.
    Create { repo: String, ref_type: String },

    /// A branch or tag was deleted.
    Delete { repo: String, ref_type: String },
}

impl Activity {
    /// Builds the typed event for a raw event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UnsupportedEventKind`] if the event type has no
    /// registered rule, or [`EventError::MissingRequiredField`] if the payload
    /// lacks a field the kind needs.
    pub fn from_raw(raw: &RawEvent) -> EventResult<Self> {
        let construct =
            lookup(&raw.r#type).ok_or_else(|| EventError::UnsupportedEventKind(raw.r#type.clone()))?;
        construct(raw)
    }

    pub(crate) fn push(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::Push {
            repo: raw.repo_name().to_string(),
            commits: required_count(raw, EventKind::Push, "size")?,
        })
    }

    pub(crate) fn issues(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::Issues {
            repo: raw.repo_name().to_string(),
            action: required_str(raw, EventKind::Issues, "action")?,
        })
    }

    pub(crate) fn watch(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::Watch {
            repo: raw.repo_name().to_string(),
        })
    }

    pub(crate) fn commit_comment(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::CommitComment {
            repo: raw.repo_name().to_string(),
        })
    }

    pub(crate) fn create(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::Create {
            repo: raw.repo_name().to_string(),
            ref_type: required_str(raw, EventKind::Create, "ref_type")?,
        })
    }

    pub(crate) fn delete(raw: &RawEvent) -> EventResult<Self> {
        Ok(Self::Delete {
            repo: raw.repo_name().to_string(),
            ref_type: required_str(raw, EventKind::Delete, "ref_type")?,
        })
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Push { .. } => EventKind::Push,
            Self::Issues { .. } => EventKind::Issues,
            Self::Watch { .. } => EventKind::Watch,
            Self::CommitComment { .. } => EventKind::CommitComment,
            Self::Create { .. } => EventKind::Create,
            Self::Delete { .. } => EventKind::Delete,
        }
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        match self {
            Self::Push { repo, .. }
            | Self::Issues { repo, .. }
            | Self::Watch { repo }
            | Self::CommitComment { repo }
            | Self::Create { repo, .. }
            | Self::Delete { repo, .. } => repo,
        }
    }

    /// Renders the one-line description.
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::Push { repo, commits } => {
                format!("Pushed {commits} {} to {repo}", plural("commit", *commits))
            }
            Self::Issues { repo, action } if action == "opened" => {
                format!("Opened a new issue in {repo}")
            }
            Self::Issues { repo, action } => {
                format!("{} an issue in {repo}", capitalize(action))
            }
            Self::Watch { repo } => format!("Starred {repo}"),
            Self::CommitComment { repo } => format!("Commented on a commit in {repo}"),
            Self::Create { repo, ref_type } if ref_type == "repository" => {
                format!("Created repository {repo}")
            }
            Self::Create { repo, ref_type } => format!("Created a {ref_type} in {repo}"),
            Self::Delete { repo, ref_type } => format!("Deleted a {ref_type} from {repo}"),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Reads a string payload field. Wrong JSON types count as missing.
fn required_str(raw: &RawEvent, kind: EventKind, field: &'static str) -> EventResult<String> {
    raw.payload_field(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(EventError::MissingRequiredField { kind, field })
}

/// Reads a non-negative integer payload field.
fn required_count(raw: &RawEvent, kind: EventKind, field: &'static str) -> EventResult<u64> {
    raw.payload_field(field)
        .and_then(Value::as_u64)
        .ok_or(EventError::MissingRequiredField { kind, field })
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(r#type: &str, payload: Value) -> RawEvent {
        let Value::Object(payload) = payload else {
            panic!("payload must be an object");
        };
        RawEvent::new(r#type, "o/r").with_payload(payload)
    }

    #[test]
    fn test_push_from_raw() {
        let activity = Activity::from_raw(&raw("PushEvent", json!({ "size": 4 }))).unwrap();
        assert_eq!(
            activity,
            Activity::Push {
                repo: "o/r".to_string(),
                commits: 4
            }
        );
        assert_eq!(activity.kind(), EventKind::Push);
        assert_eq!(activity.repo(), "o/r");
    }

    #[test]
    fn test_push_missing_size() {
        let err = Activity::from_raw(&raw("PushEvent", json!({}))).unwrap_err();
        assert_eq!(
            err,
            EventError::MissingRequiredField {
                kind: EventKind::Push,
                field: "size"
            }
        );
    }

    #[test]
    fn test_push_negative_size_is_missing() {
        let err = Activity::from_raw(&raw("PushEvent", json!({ "size": -1 }))).unwrap_err();
        assert!(matches!(
            err,
            EventError::MissingRequiredField { field: "size", .. }
        ));
    }

    #[test]
    fn test_push_string_size_is_missing() {
        let result = Activity::from_raw(&raw("PushEvent", json!({ "size": "3" })));
        assert!(result.is_err());
    }

    #[test]
    fn test_push_zero_commits() {
        let activity = Activity::from_raw(&raw("PushEvent", json!({ "size": 0 }))).unwrap();
        assert_eq!(activity.format(), "Pushed 0 commits to o/r");
    }

    #[test]
    fn test_issues_missing_action() {
        let err = Activity::from_raw(&raw("IssuesEvent", json!({ "issue": {} }))).unwrap_err();
        assert_eq!(
            err,
            EventError::MissingRequiredField {
                kind: EventKind::Issues,
                field: "action"
            }
        );
    }

    #[test]
    fn test_issues_other_actions() {
        let reopened = Activity::Issues {
            repo: "o/r".to_string(),
            action: "reopened".to_string(),
        };
        assert_eq!(reopened.format(), "Reopened an issue in o/r");
    }

    #[test]
    fn test_watch_ignores_payload() {
        let activity =
            Activity::from_raw(&raw("WatchEvent", json!({ "action": "started" }))).unwrap();
        assert_eq!(activity.format(), "Starred o/r");
    }

    #[test]
    fn test_commit_comment() {
        let activity = Activity::from_raw(&raw("CommitCommentEvent", json!({}))).unwrap();
        assert_eq!(activity.format(), "Commented on a commit in o/r");
    }

    #[test]
    fn test_create_tag() {
        let activity =
            Activity::from_raw(&raw("CreateEvent", json!({ "ref_type": "tag" }))).unwrap();
        assert_eq!(activity.format(), "Created a tag in o/r");
    }

    #[test]
    fn test_delete_missing_ref_type() {
        let err = Activity::from_raw(&raw("DeleteEvent", json!({ "ref": "main" }))).unwrap_err();
        assert_eq!(
            err,
            EventError::MissingRequiredField {
                kind: EventKind::Delete,
                field: "ref_type"
            }
        );
    }

    #[test]
    fn test_unsupported() {
        let err = Activity::from_raw(&raw("ForkEvent", json!({}))).unwrap_err();
        assert_eq!(err, EventError::UnsupportedEventKind("ForkEvent".to_string()));
    }

    #[test]
    fn test_display_matches_format() {
        let activity = Activity::Delete {
            repo: "o/r".to_string(),
            ref_type: "tag".to_string(),
        };
        assert_eq!(activity.to_string(), activity.format());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("closed"), "Closed");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("édité"), "Édité");
    }
}
