use serde::{Deserialize, Serialize};

use super::event::EventId;

/// How a classification result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationOutcome {
    /// The reply parsed into one or more valid comma-separated indices.
    Parsed,
    /// No token parsed, but a lone digit in the reply was valid.
    DigitRescue,
    /// Nothing validated; the taxonomy fallback label was assigned.
    Fallback,
}

/// The validated labels assigned to one event.
///
/// Labels are always members of the taxonomy the classifier ran with, ordered
/// by first appearance in the oracle reply. A result never has an empty label
/// set: when nothing validates it holds exactly the fallback label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub event_id: EventId,
    pub labels: Vec<String>,
    pub outcome: ClassificationOutcome,
}

impl ClassificationResult {
    pub fn new(
        event_id: EventId,
        labels: Vec<String>,
        outcome: ClassificationOutcome,
    ) -> Self {
        Self {
            event_id,
            labels,
            outcome,
        }
    }
}
