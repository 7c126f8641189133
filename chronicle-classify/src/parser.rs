//! Staged parsing of raw oracle replies into taxonomy labels.
//!
//! Stage order is load-bearing: each stage assumes earlier ones already
//! removed malformed input.
//!
//! 1. Strip all whitespace and newlines.
//! 2. Split on commas, keep purely numeric tokens.
//! 3. Range-validate against `[1, N]`, map to labels, dedupe preserving
//!    first-seen order.
//! 4. If empty but any digit exists in the reply, try the first digit alone.
//! 5. Still empty: exactly the fallback label.

use chronicle_core::models::ClassificationOutcome;
use chronicle_core::taxonomy::Taxonomy;

/// Parse a raw oracle reply into validated labels.
///
/// Total: every input, including the empty reply a timed-out call is treated
/// as, yields a non-empty label list.
pub fn parse_labels(raw: &str, taxonomy: &Taxonomy) -> (Vec<String>, ClassificationOutcome) {
    // Stage 1: strip whitespace and newlines.
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    // Stages 2-3: numeric tokens, range-validated, deduped in order.
    let mut labels: Vec<String> = Vec::new();
    for token in compact.split(',') {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        // A token too large for usize is out of range for any taxonomy.
        let Ok(index) = token.parse::<usize>() else {
            continue;
        };
        if let Some(label) = taxonomy.label_at(index) {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
    }
    if !labels.is_empty() {
        return (labels, ClassificationOutcome::Parsed);
    }

    // Stage 4: first digit character alone, if in range.
    if let Some(digit) = compact.bytes().find(|b| b.is_ascii_digit()) {
        let index = (digit - b'0') as usize;
        if let Some(label) = taxonomy.label_at(index) {
            return (
                vec![label.to_string()],
                ClassificationOutcome::DigitRescue,
            );
        }
    }

    // Stage 5: fallback.
    (
        vec![taxonomy.fallback().to_string()],
        ClassificationOutcome::Fallback,
    )
}
