//! Column ordering for export.

use crate::records::Record;

/// Fields pinned to the front of the table, in this order, for whichever of
/// them are present. Everything else follows in original encounter order.
pub const PRIORITY_COLUMNS: [&str; 9] = [
    "id", "year", "name", "years", "title", "fullText", "summary", "image", "bio",
];

/// Compute the header for a set of records: priority columns first, then the
/// union of remaining keys in encounter order across records. Stable and
/// reproducible for the same input.
pub fn header_order(records: &[Record]) -> Vec<String> {
    let mut encountered: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !encountered.contains(&key.as_str()) {
                encountered.push(key);
            }
        }
    }

    let mut header: Vec<String> = PRIORITY_COLUMNS
        .iter()
        .filter(|p| encountered.contains(p))
        .map(|p| p.to_string())
        .collect();
    for key in encountered {
        if !header.iter().any(|h| h == key) {
            header.push(key.to_string());
        }
    }
    header
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn priority_fields_come_first_in_fixed_order() {
        // Deliberately scrambled key order; summary must still precede image
        // and fullText must precede summary.
        let records = vec![record(json!({
            "summary": "s",
            "id": 1,
            "image": "x.jpg",
            "fullText": "f",
            "year": 1978,
            "title": "t"
        }))];
        assert_eq!(
            header_order(&records),
            vec!["id", "year", "title", "fullText", "summary", "image"]
        );
    }

    #[test]
    fn extra_fields_follow_in_encounter_order() {
        let records = vec![record(json!({
            "id": 1,
            "zeta": "z",
            "year": 1978,
            "alpha": "a",
            "title": "t",
            "summary": "s"
        }))];
        assert_eq!(
            header_order(&records),
            vec!["id", "year", "title", "summary", "zeta", "alpha"]
        );
    }

    #[test]
    fn later_records_contribute_unseen_keys() {
        let records = vec![
            record(json!({"id": 1, "title": "a", "summary": "s"})),
            record(json!({"id": 2, "title": "b", "summary": "s", "categories": ["X"]})),
        ];
        assert_eq!(
            header_order(&records),
            vec!["id", "title", "summary", "categories"]
        );
    }

    #[test]
    fn absent_priority_fields_are_not_invented() {
        let records = vec![record(json!({"id": 1, "note": "n"}))];
        assert_eq!(header_order(&records), vec!["id", "note"]);
    }
}
