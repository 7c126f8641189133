//! Human-readable classification report.
//!
//! Pure function of its inputs; the caller persists the text. Output is
//! stable across runs with identical inputs so reports can be diffed.

use std::collections::HashMap;

use chronicle_core::models::{ClassificationResult, Event, EventId};
use chronicle_core::taxonomy::Taxonomy;

/// Build the markdown report: per-event listing in store order, then an
/// aggregate category table sorted descending by count, ties broken by
/// taxonomy order.
pub fn build_report(
    events: &[Event],
    results: &[ClassificationResult],
    taxonomy: &Taxonomy,
) -> String {
    let by_id: HashMap<&EventId, &ClassificationResult> =
        results.iter().map(|r| (&r.event_id, r)).collect();

    let mut out = String::new();
    out.push_str("# Categorization Report\n\n");
    out.push_str(&format!("**Total events**: {}\n", events.len()));
    out.push_str(&format!("**Categories**: {}\n", taxonomy.len()));
    out.push_str("\n---\n");

    for (i, event) in events.iter().enumerate() {
        out.push_str(&format!("\n## {}. {}\n", i + 1, event.title));
        out.push_str(&format!("**Year**: {}\n", event.year));
        let categories = by_id
            .get(&event.id)
            .map(|r| r.labels.join(", "))
            .unwrap_or_else(|| "(none)".to_string());
        out.push_str(&format!("**Categories**: {categories}\n"));
    }

    out.push_str("\n---\n\n## Statistics\n\n");
    out.push_str("| Category | Events |\n");
    out.push_str("|----------|--------|\n");
    for (label, count) in aggregate_counts(results, taxonomy) {
        out.push_str(&format!("| {label} | {count} |\n"));
    }

    out
}

/// Count label occurrences across all results. Every taxonomy label appears
/// (zero included); labels outside the taxonomy sort after it, by name.
fn aggregate_counts(
    results: &[ClassificationResult],
    taxonomy: &Taxonomy,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results {
        for label in &result.labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<(String, usize)> = taxonomy
        .labels()
        .iter()
        .map(|label| (label.clone(), counts.get(label.as_str()).copied().unwrap_or(0)))
        .collect();

    let mut foreign: Vec<(String, usize)> = counts
        .iter()
        .filter(|(label, _)| !taxonomy.contains(label))
        .map(|(label, count)| (label.to_string(), *count))
        .collect();
    foreign.sort();
    rows.extend(foreign);

    // Descending by count; ties keep taxonomy order (stable sort over the
    // taxonomy-ordered rows).
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
