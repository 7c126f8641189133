//! Merge engine: reconcile classification results into the canonical store.
//!
//! Write ordering is a hard precondition, not best-effort: the pre-merge
//! backup must be durable before the canonical file is overwritten. Merging
//! the same results twice produces an identical store (replacement
//! semantics, not accumulation).

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::Utc;
use chronicle_core::models::{
    ClassificationOutcome, ClassificationResult, Event, EventId, MergeOutcome, MergeStats,
};
use chronicle_core::ChronicleResult;
use tracing::{info, warn};

use crate::backup::write_backup;
use crate::store::{load_events, save_events};

/// Overwrite `categories` on every event that has a non-empty result.
///
/// Full replacement, not union. Events without a result are untouched and
/// counted as skipped; result ids absent from the store are ignored.
pub fn apply_results(events: &mut [Event], results: &[ClassificationResult]) -> MergeStats {
    let lookup: HashMap<&EventId, &[String]> = results
        .iter()
        .filter(|r| !r.labels.is_empty())
        .map(|r| (&r.event_id, r.labels.as_slice()))
        .collect();

    let mut stats = MergeStats::default();
    for event in events.iter_mut() {
        match lookup.get(&event.id) {
            Some(labels) => {
                event.categories = Some(labels.to_vec());
                stats.updated += 1;
            }
            None => stats.skipped += 1,
        }
    }

    let unmatched = lookup.len().saturating_sub(stats.updated);
    if unmatched > 0 {
        // Aggregate only; per-instance logging would be noise at scale.
        warn!(unmatched, "classification results without a store event");
    }

    stats.category_counts = count_categories(events);
    stats
}

/// Merge classification results into the canonical store file.
///
/// Order of operations: read store (fatal on failure), write durable backup
/// (fatal on failure, store untouched), mutate in memory, atomically rewrite
/// the store. Callers must serialize invocations against one store.
pub fn merge_into_store(
    canonical: &Path,
    results: &[ClassificationResult],
) -> ChronicleResult<MergeOutcome> {
    let mut events = load_events(canonical)?;
    let backup_path = write_backup(canonical)?;

    let stats = apply_results(&mut events, results);
    save_events(canonical, &events)?;

    info!(
        updated = stats.updated,
        skipped = stats.skipped,
        store = %canonical.display(),
        "merge complete"
    );
    Ok(MergeOutcome {
        stats,
        backup_path,
        completed_at: Utc::now(),
    })
}

/// Read classification results back out of a categorized event file.
///
/// Only events carrying a non-empty `categories` field participate, mirroring
/// the merge lookup's own filter.
pub fn results_from_categorized(events: &[Event]) -> Vec<ClassificationResult> {
    events
        .iter()
        .filter_map(|event| {
            let labels = event.categories.clone()?;
            if labels.is_empty() {
                return None;
            }
            Some(ClassificationResult::new(
                event.id.clone(),
                labels,
                ClassificationOutcome::Parsed,
            ))
        })
        .collect()
}

/// Occurrences of each category across the whole store.
fn count_categories(events: &[Event]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        for label in event.categories.iter().flatten() {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }
    counts
}
