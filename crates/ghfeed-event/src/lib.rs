//! Event types for ghfeed.
//!
//! This crate provides the raw event record as returned by the GitHub Events
//! API:
//! - [`RawEvent`]: A single timeline entry, before dispatch
//! - [`RepoRef`]: The repository an event happened in

mod raw;

pub use raw::{Payload, RawEvent, RepoRef};
