use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::taxonomy::Taxonomy;

/// Raw taxonomy section as it appears in the config file. Turned into a
/// validated [`Taxonomy`] via [`TaxonomyConfig::build`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub labels: Vec<String>,
    pub fallback: String,
}

impl TaxonomyConfig {
    /// Validate and build the immutable taxonomy value.
    pub fn build(&self) -> Result<Taxonomy, ConfigError> {
        Taxonomy::new(self.labels.clone(), self.fallback.clone())
    }
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        let reference = Taxonomy::reference();
        Self {
            labels: reference.labels().to_vec(),
            fallback: reference.fallback().to_string(),
        }
    }
}
