//! Pipeline configuration, loaded from TOML with full defaults.

pub mod defaults;

mod oracle_config;
mod taxonomy_config;

pub use oracle_config::OracleConfig;
pub use taxonomy_config::TaxonomyConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::taxonomy::Taxonomy;

/// Top-level configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronicleConfig {
    pub oracle: OracleConfig,
    pub taxonomy: TaxonomyConfig,
    /// Concurrent classification calls. Clamped to
    /// [`crate::constants::MAX_CLASSIFY_WORKERS`] by the engine.
    pub workers: usize,
}

impl Default for ChronicleConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            taxonomy: TaxonomyConfig::default(),
            workers: defaults::DEFAULT_CLASSIFY_WORKERS,
        }
    }
}

impl ChronicleConfig {
    /// Load from a TOML file. Missing keys fall back to defaults;
    /// an unreadable or invalid file is fatal.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        if config.workers == 0 {
            config.workers = defaults::DEFAULT_CLASSIFY_WORKERS;
        }
        // Surface taxonomy problems at load time, not mid-batch.
        config.taxonomy.build()?;
        Ok(config)
    }

    /// Build the validated taxonomy this config describes.
    pub fn taxonomy(&self) -> Result<Taxonomy, ConfigError> {
        self.taxonomy.build()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = ChronicleConfig::default();
        assert_eq!(config.oracle.backend, "ollama");
        assert_eq!(config.oracle.timeout_secs, 30);
        let taxonomy = config.taxonomy().unwrap();
        assert_eq!(taxonomy.len(), 9);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[oracle]\nmodel = \"llama3:8b\"\ntimeout_secs = 10\n"
        )
        .unwrap();
        let config = ChronicleConfig::load(file.path()).unwrap();
        assert_eq!(config.oracle.model, "llama3:8b");
        assert_eq!(config.oracle.timeout_secs, 10);
        assert_eq!(config.oracle.base_url, "http://localhost:11434");
        assert_eq!(config.taxonomy().unwrap().len(), 9);
    }

    #[test]
    fn custom_taxonomy_is_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[taxonomy]\nlabels = [\"A\", \"B\"]\nfallback = \"missing\"\n"
        )
        .unwrap();
        let err = ChronicleConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FallbackNotInTaxonomy { .. }));
    }

    #[test]
    fn invalid_toml_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml [").unwrap();
        let err = ChronicleConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed { .. }));
    }
}
