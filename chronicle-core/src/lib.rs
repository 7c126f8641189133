//! # chronicle-core
//!
//! Foundation crate for the Chronicle timeline pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ChronicleConfig;
pub use errors::{ChronicleError, ChronicleResult};
pub use models::{ClassificationOutcome, ClassificationResult, Event, EventId, MergeOutcome, MergeStats};
pub use taxonomy::Taxonomy;
