//! Import: delimited text back into records.
//!
//! Delimiter is auto-detected from the header line (`;` preferred when
//! present, else `,`). A field named `id` is coerced back to an integer when
//! its text is fully numeric; every other field is retained as text.

use std::fs;
use std::path::Path;

use chronicle_core::errors::TabularError;
use chronicle_core::ChronicleResult;
use serde_json::{Map, Value};
use tracing::info;

use crate::records::Record;

/// Pick the delimiter from the header line: `;` wins if present.
pub fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Rebuild records from a header and rows of cell text.
pub fn from_table(header: &[String], rows: &[Vec<String>]) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            let mut record = Map::new();
            for (key, cell) in header.iter().zip(row) {
                record.insert(key.clone(), import_value(key, cell));
            }
            record
        })
        .collect()
}

/// Read a delimited file produced by export (or edited in a spreadsheet).
pub fn import_csv(path: &Path) -> ChronicleResult<Vec<Record>> {
    let raw = fs::read_to_string(path).map_err(|e| TabularError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let header_line = raw.lines().next().ok_or_else(|| TabularError::MissingHeader {
        path: path.display().to_string(),
    })?;
    let delimiter = detect_delimiter(header_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(raw.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| TabularError::MalformedRow {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TabularError::MalformedRow {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        rows.push(record.iter().map(String::from).collect());
    }

    let records = from_table(&header, &rows);
    info!(path = %path.display(), rows = records.len(), "table imported");
    Ok(records)
}

/// Cell text back to a field value. Only `id` is coerced; everything else
/// stays text, exactly as the spreadsheet left it.
fn import_value(key: &str, cell: &str) -> Value {
    if key == "id" && !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = cell.parse::<i64>() {
            return Value::Number(n.into());
        }
    }
    Value::String(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semicolon_preferred_over_comma() {
        assert_eq!(detect_delimiter("id;year,title"), b';');
        assert_eq!(detect_delimiter("id,year,title"), b',');
    }

    #[test]
    fn numeric_id_coerced_text_id_retained() {
        let header: Vec<String> = vec!["id".into(), "title".into()];
        let rows = vec![
            vec!["17".into(), "a".into()],
            vec!["draft-3".into(), "b".into()],
        ];
        let records = from_table(&header, &rows);
        assert_eq!(records[0]["id"], Value::Number(17.into()));
        assert_eq!(records[1]["id"], Value::String("draft-3".into()));
    }

    #[test]
    fn non_id_numeric_fields_stay_text() {
        let header: Vec<String> = vec!["id".into(), "year".into()];
        let rows = vec![vec!["1".into(), "1978".into()]];
        let records = from_table(&header, &rows);
        assert_eq!(records[0]["year"], Value::String("1978".into()));
    }

    #[test]
    fn comma_delimited_file_imports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.csv");
        fs::write(&path, "id,title,summary\n5,Belmont Report,Principles\n").unwrap();

        let records = import_csv(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], Value::Number(5.into()));
        assert_eq!(records[0]["title"], Value::String("Belmont Report".into()));
    }

    #[test]
    fn bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.csv");
        fs::write(&path, "\u{feff}id;title\n1;t\n").unwrap();

        let records = import_csv(&path).unwrap();
        assert_eq!(records[0]["id"], Value::Number(1.into()));
    }

    #[test]
    fn empty_file_reports_missing_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let err = import_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            chronicle_core::ChronicleError::Tabular(TabularError::MissingHeader { .. })
        ));
    }
}
