//! Ollama text-generation oracle.
//!
//! Connects to a local Ollama instance. Configurable model, health check
//! before first use. Callers see only success / timeout / unavailable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chronicle_core::errors::OracleError;
use chronicle_core::traits::ICategoryOracle;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Ollama oracle backend.
pub struct OllamaOracle {
    base_url: String,
    model: String,
    timeout: Duration,
    available: AtomicBool,
}

#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaOracle {
    /// Create a new Ollama oracle.
    ///
    /// `base_url` defaults to `http://localhost:11434` if `None`.
    pub fn new(model: String, timeout_secs: u64, base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "http://localhost:11434".to_string()),
            model,
            timeout: Duration::from_secs(timeout_secs),
            available: AtomicBool::new(false), // Must pass health check first.
        }
    }

    /// Check if the Ollama server is reachable.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(_) => return false,
        };

        let result = rt.block_on(async {
            let client = reqwest::Client::new();
            client
                .get(&url)
                .timeout(Duration::from_secs(5))
                .send()
                .await
        });

        match result {
            Ok(resp) if resp.status().is_success() => {
                self.available.store(true, Ordering::Relaxed);
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                self.available.store(false, Ordering::Relaxed);
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                self.available.store(false, Ordering::Relaxed);
                false
            }
        }
    }

    fn request_completion(&self, prompt: &str) -> Result<String, OracleError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(OracleError::Unavailable {
                reason: "health check has not passed".to_string(),
            });
        }

        let url = format!("{}/api/generate", self.base_url);
        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OracleError::Unavailable {
                reason: format!("runtime error: {e}"),
            })?;

        let timeout = self.timeout;
        rt.block_on(async {
            let client = reqwest::Client::new();
            let response = client
                .post(&url)
                .json(&request)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        OracleError::Timeout {
                            seconds: timeout.as_secs(),
                        }
                    } else {
                        OracleError::Unavailable {
                            reason: e.to_string(),
                        }
                    }
                })?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(OracleError::RequestFailed { status, body });
            }

            let parsed: OllamaGenerateResponse =
                response.json().await.map_err(|e| OracleError::Unavailable {
                    reason: format!("malformed reply: {e}"),
                })?;
            Ok(parsed.response)
        })
    }
}

impl ICategoryOracle for OllamaOracle {
    fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        self.request_completion(prompt)
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_oracle_reports_unavailable() {
        let oracle = OllamaOracle::new("gemma3:27b".into(), 30, None);
        assert!(!oracle.is_available());
        let err = oracle.complete("prompt").unwrap_err();
        assert!(matches!(err, OracleError::Unavailable { .. }));
    }

    #[test]
    fn base_url_defaults_to_localhost() {
        let oracle = OllamaOracle::new("m".into(), 30, None);
        assert_eq!(oracle.base_url, "http://localhost:11434");
    }
}
