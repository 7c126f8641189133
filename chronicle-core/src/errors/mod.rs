//! Error taxonomy, one enum per subsystem plus the workspace aggregate.

mod config_error;
mod oracle_error;
mod store_error;
mod tabular_error;

pub use config_error::ConfigError;
pub use oracle_error::OracleError;
pub use store_error::StoreError;
pub use tabular_error::TabularError;

/// Workspace-wide error type. Subsystem errors convert in with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ChronicleError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tabular(#[from] TabularError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience alias used across all crates.
pub type ChronicleResult<T> = Result<T, ChronicleError>;
