/// Configuration and taxonomy validation errors. All fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("config {path} is not valid TOML: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("taxonomy has no labels")]
    EmptyTaxonomy,

    #[error("taxonomy label appears twice: {label}")]
    DuplicateLabel { label: String },

    #[error("fallback label is not in the taxonomy: {label}")]
    FallbackNotInTaxonomy { label: String },

    #[error("unknown oracle backend: {name}")]
    UnknownBackend { name: String },
}
