//! # chronicle-classify
//!
//! Turns noisy free-text oracle replies into validated, bounded tag sets.
//! One oracle call per event, staged reply parsing, fallback policy on any
//! failure, and a human-readable report over the batch.

pub mod engine;
pub mod oracle;
pub mod parser;
pub mod prompt;
pub mod report;

pub use engine::ClassificationEngine;
pub use oracle::{create_oracle, OllamaOracle, ScriptedOracle};
pub use parser::parse_labels;
pub use prompt::build_prompt;
pub use report::build_report;
