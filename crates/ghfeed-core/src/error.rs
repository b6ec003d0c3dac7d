//! Event error types.

use thiserror::Error;

use crate::EventKind;

/// Errors raised while dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// No formatting rule is registered for the event type.
    #[error("unsupported event kind: {0}")]
    UnsupportedEventKind(String),

    /// The payload lacks a field the event kind needs.
    #[error("{kind} is missing required field `{field}`")]
    MissingRequiredField {
        kind: EventKind,
        field: &'static str,
    },
}

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;
