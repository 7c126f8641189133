//! ClassificationEngine — drives one oracle call per event and applies the
//! fallback policy. Classification is total: it never raises to the caller.

use chronicle_core::constants::{DIAGNOSTIC_REPLY_PREVIEW, MAX_CLASSIFY_WORKERS};
use chronicle_core::models::{ClassificationOutcome, ClassificationResult, Event};
use chronicle_core::taxonomy::Taxonomy;
use chronicle_core::traits::ICategoryOracle;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::parser::parse_labels;
use crate::prompt::build_prompt;

/// Engine binding an oracle to a taxonomy for the lifetime of a run.
pub struct ClassificationEngine {
    oracle: Box<dyn ICategoryOracle>,
    taxonomy: Taxonomy,
}

impl ClassificationEngine {
    pub fn new(oracle: Box<dyn ICategoryOracle>, taxonomy: Taxonomy) -> Self {
        Self { oracle, taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Classify one event. Total: timeouts, unavailability, and unparsable
    /// replies all resolve to the fallback label, never an error.
    pub fn classify_event(&self, event: &Event) -> ClassificationResult {
        let prompt = build_prompt(event, &self.taxonomy);

        let raw = match self.oracle.complete(&prompt) {
            Ok(text) => text,
            Err(e) => {
                warn!(event_id = %event.id, error = %e, "oracle call failed, using fallback");
                String::new()
            }
        };

        let (labels, outcome) = parse_labels(&raw, &self.taxonomy);
        if outcome == ClassificationOutcome::Fallback && !raw.trim().is_empty() {
            let preview: String = raw.chars().take(DIAGNOSTIC_REPLY_PREVIEW).collect();
            warn!(event_id = %event.id, reply = %preview, "unparsable oracle reply, using fallback");
        }

        ClassificationResult::new(event.id.clone(), labels, outcome)
    }

    /// Classify every event sequentially, in store order.
    pub fn classify_all(&self, events: &[Event]) -> Vec<ClassificationResult> {
        let total = events.len();
        events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                info!(index = i + 1, total, title = %event.title, "classifying");
                self.classify_event(event)
            })
            .collect()
    }

    /// Classify with a bounded worker pool.
    ///
    /// Events stay independent: each gets its own single-shot oracle call,
    /// and results come back in input order. The pool is capped because the
    /// oracle is a shared, resource-intensive external process.
    pub fn classify_all_bounded(
        &self,
        events: &[Event],
        workers: usize,
    ) -> Vec<ClassificationResult> {
        let workers = workers.clamp(1, MAX_CLASSIFY_WORKERS);
        if workers == 1 {
            return self.classify_all(events);
        }

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "worker pool unavailable, classifying sequentially");
                return self.classify_all(events);
            }
        };

        info!(workers, events = events.len(), "classifying with bounded pool");
        pool.install(|| {
            events
                .par_iter()
                .map(|event| self.classify_event(event))
                .collect()
        })
    }
}
