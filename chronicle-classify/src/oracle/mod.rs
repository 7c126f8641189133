//! Oracle backends.
//!
//! The oracle is a black box: prompt in, raw text out, may time out or be
//! unavailable. Backends are selected by config; anything implementing
//! [`ICategoryOracle`] substitutes.

mod ollama;
mod scripted;

pub use ollama::OllamaOracle;
pub use scripted::ScriptedOracle;

use chronicle_core::config::OracleConfig;
use chronicle_core::errors::{ConfigError, OracleError};
use chronicle_core::traits::ICategoryOracle;
use chronicle_core::ChronicleResult;
use tracing::info;

/// Create the configured oracle backend and verify it is reachable.
///
/// A failed health check is fatal here, at bootstrap, so a batch never starts
/// against a dead backend; per-call failures after this point fall back to
/// the taxonomy's default label instead.
pub fn create_oracle(config: &OracleConfig) -> ChronicleResult<Box<dyn ICategoryOracle>> {
    match config.backend.as_str() {
        "ollama" => {
            let oracle = OllamaOracle::new(
                config.model.clone(),
                config.timeout_secs,
                Some(config.base_url.clone()),
            );
            if !oracle.health_check() {
                return Err(OracleError::Unavailable {
                    reason: format!("Ollama is not reachable at {}", config.base_url),
                }
                .into());
            }
            info!(backend = "ollama", model = %config.model, "oracle ready");
            Ok(Box::new(oracle))
        }
        other => Err(ConfigError::UnknownBackend {
            name: other.to_string(),
        }
        .into()),
    }
}
