/// Canonical store errors. Read and backup failures are fatal to a run;
/// a write failure can only occur after the backup is durable.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read store {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("store {path} is not a valid event list: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("duplicate event id {id} in store {path}")]
    DuplicateId { id: String, path: String },

    #[error("cannot write backup {path}: {reason}")]
    BackupFailed { path: String, reason: String },

    #[error("cannot write store {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}
