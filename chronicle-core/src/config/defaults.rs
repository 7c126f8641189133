//! Default values for all config structs.

/// Local Ollama endpoint.
pub const DEFAULT_ORACLE_BASE_URL: &str = "http://localhost:11434";

/// Model the reference deployment classifies with.
pub const DEFAULT_ORACLE_MODEL: &str = "gemma3:27b";

/// Per-call oracle timeout, seconds.
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;

/// Oracle backend selector.
pub const DEFAULT_ORACLE_BACKEND: &str = "ollama";

/// Classification worker count. One worker means strictly sequential calls.
pub const DEFAULT_CLASSIFY_WORKERS: usize = 1;
