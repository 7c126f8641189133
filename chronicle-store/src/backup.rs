//! Pre-merge backup snapshots.
//!
//! The snapshot is a byte-level copy of the canonical file taken strictly
//! before any merge mutation, written to a sibling path and flushed to disk.
//! It is recovery material for a human; nothing in the pipeline ever reads
//! it back automatically.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chronicle_core::errors::StoreError;
use chronicle_core::ChronicleResult;
use tracing::info;

/// Sibling path the snapshot of `canonical` is written to:
/// `timeline.json` → `timeline_backup.json`.
pub fn backup_path(canonical: &Path) -> PathBuf {
    let stem = canonical
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("store");
    canonical.with_file_name(format!("{stem}_backup.json"))
}

/// Copy the canonical file's current bytes to the backup path and flush.
///
/// Returns the backup path on success. Failing to read the canonical file is
/// a read failure; failing to write or sync the snapshot is a backup failure.
/// Either way the canonical file has not been touched yet.
pub fn write_backup(canonical: &Path) -> ChronicleResult<PathBuf> {
    let bytes = fs::read(canonical).map_err(|e| StoreError::ReadFailed {
        path: canonical.display().to_string(),
        reason: e.to_string(),
    })?;

    let target = backup_path(canonical);
    let backup_failed = |e: std::io::Error| StoreError::BackupFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    };

    let mut file = File::create(&target).map_err(backup_failed)?;
    file.write_all(&bytes).map_err(backup_failed)?;
    file.sync_all().map_err(backup_failed)?;

    info!(backup = %target.display(), bytes = bytes.len(), "pre-merge backup written");
    Ok(target)
}
