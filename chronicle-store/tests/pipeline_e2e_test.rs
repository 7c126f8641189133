//! Full pipeline: classify a store with a scripted oracle, merge the results
//! back, and check what lands on disk.

use std::fs;

use chronicle_classify::{build_report, ClassificationEngine, ScriptedOracle};
use chronicle_core::errors::OracleError;
use chronicle_core::taxonomy::Taxonomy;
use chronicle_store::{load_events, merge_into_store};

#[test]
fn classify_then_merge_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().join("timeline.json");
    fs::write(
        &canonical,
        r#"[
          {"id": 5, "year": 1978, "title": "Belmont Report", "summary": "Principles for human subjects research.", "image": "belmont.jpg"},
          {"id": 6, "year": 1990, "title": "Genome project", "summary": "Sequencing begins."}
        ]"#,
    )
    .unwrap();

    let events = load_events(&canonical).unwrap();

    // First event answered cleanly, second times out.
    let oracle = ScriptedOracle::new(vec![
        Ok("2,4,9".to_string()),
        Err(OracleError::Timeout { seconds: 30 }),
    ]);
    let taxonomy = Taxonomy::reference();
    let engine = ClassificationEngine::new(Box::new(oracle), taxonomy.clone());
    let results = engine.classify_all(&events);

    let report = build_report(&events, &results, &taxonomy);
    assert!(report.contains("## 1. Belmont Report"));
    assert!(report.contains("| Institutionalization | 2 |"));

    let outcome = merge_into_store(&canonical, &results).unwrap();
    assert_eq!(outcome.stats.updated, 2);
    assert_eq!(outcome.stats.skipped, 0);

    let merged = load_events(&canonical).unwrap();
    assert_eq!(
        merged[0].categories.as_deref().unwrap(),
        [
            "Legislation and Rights".to_string(),
            "Feminist Bioethics".to_string(),
            "Institutionalization".to_string()
        ]
    );
    // The timed-out event got exactly the fallback label.
    assert_eq!(
        merged[1].categories.as_deref().unwrap(),
        ["Institutionalization".to_string()]
    );
    // Unrecognized field survived the whole trip.
    assert_eq!(merged[0].extra["image"], "belmont.jpg");
    // Backup exists and holds the uncategorized state.
    let backup = fs::read_to_string(&outcome.backup_path).unwrap();
    assert!(!backup.contains("categories"));
}
