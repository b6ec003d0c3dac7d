//! Core library for ghfeed.
//!
//! This crate turns raw GitHub events into one-line descriptions:
//! - [`dispatch`]: Looks up the rule for an event type and renders it
//! - [`Activity`]: Typed view over a [`RawEvent`], one variant per kind
//! - [`plural`]: English pluralization used by the formatters
//! - [`render_feed`]: Order-preserving rendering of a whole feed

mod activity;
mod dispatch;
mod error;
mod feed;
mod kind;
mod language;

pub use activity::Activity;
pub use dispatch::{dispatch, supported_kinds};
pub use error::{EventError, EventResult};
pub use feed::{KindFilter, render_feed};
pub use ghfeed_event::RawEvent;
pub use kind::EventKind;
pub use language::plural;
