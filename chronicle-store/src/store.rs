//! Canonical store persistence: an ordered JSON array of event objects.
//!
//! Reads verify id uniqueness; writes are atomic (temp file + rename in the
//! same directory) so a failed write can never leave a torn store.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chronicle_core::errors::StoreError;
use chronicle_core::models::Event;
use chronicle_core::ChronicleResult;
use tracing::debug;

/// Load the full event list. Fatal on a missing or corrupt file, or on
/// duplicate ids.
pub fn load_events(path: &Path) -> ChronicleResult<Vec<Event>> {
    let raw = fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let events: Vec<Event> =
        serde_json::from_str(&raw).map_err(|e| StoreError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    ensure_unique_ids(&events, path)?;
    debug!(path = %path.display(), events = events.len(), "store loaded");
    Ok(events)
}

/// Write the full event list atomically.
///
/// Serializes to `<path>.tmp` in the same directory, flushes to disk, then
/// renames over the target. Unrecognized event fields and non-ASCII text are
/// written through verbatim.
pub fn save_events(path: &Path, events: &[Event]) -> ChronicleResult<()> {
    let body = serde_json::to_string_pretty(events)?;
    let tmp = path.with_extension("json.tmp");

    let write_failed = |e: std::io::Error| StoreError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut file = File::create(&tmp).map_err(write_failed)?;
    file.write_all(body.as_bytes()).map_err(write_failed)?;
    file.write_all(b"\n").map_err(write_failed)?;
    file.sync_all().map_err(write_failed)?;
    drop(file);

    fs::rename(&tmp, path).map_err(write_failed)?;
    debug!(path = %path.display(), events = events.len(), "store written");
    Ok(())
}

fn ensure_unique_ids(events: &[Event], path: &Path) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for event in events {
        if !seen.insert(&event.id) {
            return Err(StoreError::DuplicateId {
                id: event.id.to_string(),
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}
