//! # chronicle-tabular
//!
//! Round-trips the canonical store to and from delimited text for manual
//! spreadsheet editing. Operates on raw ordered JSON records, outside the
//! classification flow; the only guarantee is exact round-trip of field
//! values under a stable, priority-first column ordering.

pub mod columns;
pub mod export;
pub mod import;
pub mod records;

pub use columns::{header_order, PRIORITY_COLUMNS};
pub use export::{export_csv, to_table};
pub use import::{from_table, import_csv};
pub use records::{load_records, save_records, Record};
