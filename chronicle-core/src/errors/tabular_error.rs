/// Tabular bridge errors (delimited-text import/export).
#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("cannot read table {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("cannot write table {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("table {path} has no header row")]
    MissingHeader { path: String },

    #[error("malformed row in {path}: {reason}")]
    MalformedRow { path: String, reason: String },
}
