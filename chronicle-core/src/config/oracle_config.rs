use serde::{Deserialize, Serialize};

use super::defaults;

/// Oracle backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Backend selector. Currently `"ollama"`.
    pub backend: String,
    /// Model name passed to the backend.
    pub model: String,
    /// Endpoint base URL.
    pub base_url: String,
    /// Per-call timeout in seconds. A timeout is a normal outcome that
    /// triggers fallback labeling, not an error to retry.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_ORACLE_BACKEND.to_string(),
            model: defaults::DEFAULT_ORACLE_MODEL.to_string(),
            base_url: defaults::DEFAULT_ORACLE_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_ORACLE_TIMEOUT_SECS,
        }
    }
}
