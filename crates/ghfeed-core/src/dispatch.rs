//! Event dispatch.
//!
//! The set of supported kinds is closed: a static registry maps each GitHub event
//! type string to the constructor of its [`Activity`] variant.

use ghfeed_event::RawEvent;
use tracing::debug;

use crate::{Activity, EventKind, EventResult};

type Constructor = fn(&RawEvent) -> EventResult<Activity>;

static REGISTRY: [(EventKind, Constructor); 6] = [
    (EventKind::Push, Activity::push),
    (EventKind::Issues, Activity::issues),
    (EventKind::Watch, Activity::watch),
    (EventKind::CommitComment, Activity::commit_comment),
    (EventKind::Create, Activity::create),
    (EventKind::Delete, Activity::delete),
];

/// Finds the constructor registered for an event type string.
pub(crate) fn lookup(event_type: &str) -> Option<Constructor> {
    REGISTRY
        .iter()
        .find(|(kind, _)| kind.as_str() == event_type)
        .map(|(_, construct)| *construct)
}

/// Returns the kinds with a registered rule.
#[must_use]
pub fn supported_kinds() -> &'static [EventKind] {
    &EventKind::ALL
}

/// Renders a raw event into its one-line description.
///
/// # Errors
///
/// Returns an error if no rule is registered for the event type, or if the
/// payload is missing a field the rule needs. Neither is recovered here.
pub fn dispatch(event: &RawEvent) -> EventResult<String> {
    let activity = Activity::from_raw(event)?;

    debug!(
        id = event.id.as_deref().unwrap_or("-"),
        created_at = ?event.created_at,
        kind = %activity.kind(),
        repo = activity.repo(),
        "dispatched event"
    );

    Ok(activity.format())
}
