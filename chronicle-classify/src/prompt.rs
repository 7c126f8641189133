//! Prompt construction for the classification oracle.

use chronicle_core::constants::REQUESTED_LABELS_PER_EVENT;
use chronicle_core::models::Event;
use chronicle_core::taxonomy::Taxonomy;

/// Build the bounded classification prompt for one event.
///
/// Embeds the event's year, title, and summary plus the full enumerated
/// taxonomy with 1-based indices, and instructs the oracle to answer only
/// with comma-separated indices.
pub fn build_prompt(event: &Event, taxonomy: &Taxonomy) -> String {
    let mut catalog = String::new();
    for (i, label) in taxonomy.labels().iter().enumerate() {
        catalog.push_str(&format!("{}. {}\n", i + 1, label));
    }

    format!(
        "You are a curator of a historical timeline. Analyze the following \
         event and categorize it.\n\
         \n\
         EVENT:\n\
         Year: {year}\n\
         Title: {title}\n\
         Summary: {summary}\n\
         \n\
         AVAILABLE CATEGORIES:\n\
         {catalog}\
         \n\
         INSTRUCTIONS:\n\
         - Choose the 1 to {max} most relevant categories for this event\n\
         - Answer ONLY with the category numbers, separated by commas\n\
         - Example answer: 1,3,8\n\
         \n\
         ANSWER (numbers only):",
        year = event.year,
        title = event.title,
        summary = event.summary,
        max = REQUESTED_LABELS_PER_EVENT,
    )
}
