//! Feed printing.

use std::io::Write;

use anyhow::{Context, Result};
use ghfeed_config::OutputConfig;
use ghfeed_core::{KindFilter, RawEvent, render_feed};
use tracing::warn;

/// Renders the feed and writes the header plus one bulleted line per event.
///
/// Events that fail to render are skipped with a warning, unless `strict` is
/// set, in which case the first failure aborts before anything is written.
/// Returns the number of event lines written.
pub fn print_feed(
    out: &mut impl Write,
    events: &[RawEvent],
    filter: &KindFilter,
    output: &OutputConfig,
    strict: bool,
) -> Result<usize> {
    let mut lines = Vec::with_capacity(events.len());

    for result in render_feed(events, filter) {
        match result {
            Ok(line) => lines.push(line),
            Err(e) if strict => return Err(e).context("failed to render event"),
            Err(e) => warn!(error = %e, "skipping event"),
        }
    }

    writeln!(out, "{}", output.header)?;
    for line in &lines {
        writeln!(out, "{}{line}", output.bullet)?;
    }
    out.flush()?;

    Ok(lines.len())
}
