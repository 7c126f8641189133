use crate::errors::OracleError;

/// Free-text classification oracle.
///
/// A single-shot, stateless capability: one prompt in, raw text out. No
/// conversation state is retained between calls. Any text-generation backend
/// satisfying this contract is substitutable.
pub trait ICategoryOracle: Send + Sync {
    /// Send one prompt and return the raw reply text.
    ///
    /// The error side carries the only two failure classes callers may
    /// observe: timeout and unavailable. Both are normal, expected outcomes
    /// for the classifier, not conditions to retry.
    fn complete(&self, prompt: &str) -> Result<String, OracleError>;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Whether the backend is currently usable (e.g. passed its health check).
    fn is_available(&self) -> bool;
}
