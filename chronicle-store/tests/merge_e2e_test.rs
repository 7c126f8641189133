//! End-to-end merge tests against a real on-disk store.

use std::fs;

use chronicle_core::models::{ClassificationOutcome, ClassificationResult, EventId};
use chronicle_store::{backup_path, load_events, merge_into_store};

const STORE: &str = r#"[
  {"id": 5, "year": 1978, "title": "Belmont Report", "summary": "s", "image": "belmont.jpg"},
  {"id": 6, "year": 1979, "title": "Principles book", "summary": "s"},
  {"id": 7, "year": 1984, "title": "CNS founding", "summary": "s"},
  {"id": 8, "year": 1988, "title": "SUS created", "summary": "s"}
]"#;

fn result(id: i64, labels: &[&str]) -> ClassificationResult {
    ClassificationResult::new(
        EventId::Int(id),
        labels.iter().map(|l| l.to_string()).collect(),
        ClassificationOutcome::Parsed,
    )
}

#[test]
fn backup_reflects_pre_merge_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(&canonical, STORE).unwrap();
    let original_bytes = fs::read(&canonical).unwrap();

    let results = vec![result(5, &["Research and Experimentation"])];
    let outcome = merge_into_store(&canonical, &results).unwrap();

    assert_eq!(outcome.backup_path, backup_path(&canonical));
    // Backup holds the exact pre-merge bytes while the canonical moved on.
    assert_eq!(fs::read(&outcome.backup_path).unwrap(), original_bytes);
    assert_ne!(fs::read(&canonical).unwrap(), original_bytes);
}

#[test]
fn merge_stats_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(&canonical, STORE).unwrap();

    let results = vec![
        result(5, &["Research and Experimentation"]),
        result(7, &["Public Health"]),
    ];
    let outcome = merge_into_store(&canonical, &results).unwrap();

    assert_eq!(outcome.stats.updated, 2);
    assert_eq!(outcome.stats.skipped, 2);
    assert_eq!(load_events(&canonical).unwrap().len(), 4);
}

#[test]
fn merge_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(&canonical, STORE).unwrap();

    let results = vec![
        result(5, &["Research and Experimentation", "Institutionalization"]),
        result(8, &["Public Health"]),
    ];

    merge_into_store(&canonical, &results).unwrap();
    let after_first = fs::read(&canonical).unwrap();

    merge_into_store(&canonical, &results).unwrap();
    let after_second = fs::read(&canonical).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn unknown_ids_merge_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(&canonical, STORE).unwrap();

    let results = vec![result(99, &["Public Health"])];
    let outcome = merge_into_store(&canonical, &results).unwrap();
    assert_eq!(outcome.stats.updated, 0);
    assert_eq!(outcome.stats.skipped, 4);
}

#[test]
fn unreadable_store_aborts_without_backup() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    // No store file at all.
    let results = vec![result(5, &["Public Health"])];
    assert!(merge_into_store(&canonical, &results).is_err());
    assert!(!backup_path(&canonical).exists());
}

#[test]
fn unrecognized_fields_survive_merge() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(&canonical, STORE).unwrap();

    merge_into_store(&canonical, &[result(5, &["Public Health"])]).unwrap();

    let events = load_events(&canonical).unwrap();
    assert_eq!(events[0].extra["image"], "belmont.jpg");
    assert_eq!(
        events[0].categories.as_deref(),
        Some(&["Public Health".to_string()][..])
    );
}
