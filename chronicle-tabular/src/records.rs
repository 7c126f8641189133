//! Raw record I/O: the canonical file as ordered JSON objects.
//!
//! The bridge deliberately avoids the typed [`chronicle_core::Event`] model
//! so spreadsheet edits to arbitrary fields pass through untyped and
//! untouched. Key order is preserved end to end.

use std::fs;
use std::path::Path;

use chronicle_core::errors::StoreError;
use chronicle_core::ChronicleResult;
use serde_json::{Map, Value};

/// One store record: an ordered field map.
pub type Record = Map<String, Value>;

/// Load the store file as raw records.
pub fn load_records(path: &Path) -> ChronicleResult<Vec<Record>> {
    let raw = fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&raw).map_err(|e| StoreError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(records)
}

/// Write raw records back as the store file.
pub fn save_records(path: &Path, records: &[Record]) -> ChronicleResult<()> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body + "\n").map_err(|e| StoreError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
