//! # chronicle-store
//!
//! The canonical event store and the merge engine around it. The store file
//! is the single source of truth; every mutating merge writes a durable
//! sibling backup before touching it.

pub mod backup;
pub mod merge;
pub mod store;

pub use backup::{backup_path, write_backup};
pub use merge::{apply_results, merge_into_store, results_from_categorized};
pub use store::{load_events, save_events};
