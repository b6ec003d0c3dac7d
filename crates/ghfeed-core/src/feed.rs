//! Feed rendering.

use std::collections::BTreeSet;

use ghfeed_event::RawEvent;

use crate::{EventKind, EventResult, dispatch};

/// Which event types reach the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindFilter {
    /// Dispatch everything; unknown types surface as errors.
    All,

    /// Dispatch only these kinds; other types are skipped silently.
    Only(BTreeSet<EventKind>),
}

impl KindFilter {
    /// Creates a filter accepting only the given kinds.
    #[must_use]
    pub fn only(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        Self::Only(kinds.into_iter().collect())
    }

    /// Creates a filter accepting every supported kind.
    #[must_use]
    pub fn supported() -> Self {
        Self::only(EventKind::ALL)
    }

    /// Returns true if events of this type should be dispatched.
    #[must_use]
    pub fn accepts(&self, event_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(kinds) => event_type
                .parse::<EventKind>()
                .is_ok_and(|kind| kinds.contains(&kind)),
        }
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::supported()
    }
}

/// Renders every accepted event, preserving input order.
///
/// Each entry is the dispatch result for one accepted event; rejected events
/// produce no entry.
pub fn render_feed<'a>(
    events: impl IntoIterator<Item = &'a RawEvent>,
    filter: &KindFilter,
) -> Vec<EventResult<String>> {
    events
        .into_iter()
        .filter(|event| filter.accepts(&event.r#type))
        .map(dispatch)
        .collect()
}
