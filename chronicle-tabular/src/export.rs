//! Export: records to delimited text.
//!
//! Always `;`-delimited, UTF-8 with a BOM so spreadsheet tools render
//! accented text correctly on open.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chronicle_core::errors::TabularError;
use chronicle_core::ChronicleResult;
use serde_json::Value;
use tracing::info;

use crate::columns::header_order;
use crate::records::Record;

/// Export delimiter. Import auto-detects, export never varies.
pub const EXPORT_DELIMITER: u8 = b';';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Flatten records into a header plus one row of cell text per record.
/// Missing fields become empty cells.
pub fn to_table(records: &[Record]) -> (Vec<String>, Vec<Vec<String>>) {
    let header = header_order(records);
    let rows = records
        .iter()
        .map(|record| {
            header
                .iter()
                .map(|key| record.get(key).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();
    (header, rows)
}

/// Write records as `;`-delimited text with a UTF-8 BOM.
pub fn export_csv(records: &[Record], path: &Path) -> ChronicleResult<()> {
    let (header, rows) = to_table(records);

    let write_failed = |reason: String| TabularError::WriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let mut file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(UTF8_BOM)
        .map_err(|e| write_failed(e.to_string()))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .from_writer(file);
    writer
        .write_record(&header)
        .map_err(|e| write_failed(e.to_string()))?;
    for row in &rows {
        writer
            .write_record(row)
            .map_err(|e| write_failed(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_failed(e.to_string()))?;

    info!(path = %path.display(), rows = records.len(), "table exported");
    Ok(())
}

/// Cell text for one field value. Scalars render bare; arrays and objects
/// render as compact JSON so they survive as a single cell.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
