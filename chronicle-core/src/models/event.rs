use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable event identifier.
///
/// Ids in the canonical store are JSON numbers, but spreadsheet import may
/// legitimately retain a non-numeric id as text, so both forms are first-class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Int(n) => write!(f, "{n}"),
            EventId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Int(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

/// One timeline entry in the canonical store.
///
/// Events are created and edited externally; the pipeline only reads them and
/// rewrites the `categories` field during merge. Fields the pipeline does not
/// recognize are preserved untouched (and in order) through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Stable unique identifier. Identity is the id, not the position.
    pub id: EventId,
    /// Year the event occurred.
    pub year: i32,
    /// Short title.
    pub title: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Assigned category labels, in classification order. Absent until the
    /// first merge writes them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// All remaining fields, round-tripped verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Convenience constructor for the four required fields.
    pub fn new(
        id: impl Into<EventId>,
        year: i32,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            year,
            title: title.into(),
            summary: summary.into(),
            categories: None,
            extra: Map::new(),
        }
    }
}

/// Identity equality: two events are equal if they have the same id.
/// Content is irrelevant to identity (entity pattern).
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
