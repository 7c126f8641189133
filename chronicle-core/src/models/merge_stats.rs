use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters produced by one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Events whose `categories` field was overwritten.
    pub updated: usize,
    /// Events left untouched (no classification result for their id).
    pub skipped: usize,
    /// Occurrences of each category across the updated store.
    pub category_counts: BTreeMap<String, usize>,
}

/// Everything a completed merge invocation reports back.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub stats: MergeStats,
    /// Where the pre-merge snapshot was written. Never auto-consumed.
    pub backup_path: PathBuf,
    pub completed_at: DateTime<Utc>,
}
