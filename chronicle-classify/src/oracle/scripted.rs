//! Scripted oracle for tests: replays canned replies in call order.

use std::collections::VecDeque;
use std::sync::Mutex;

use chronicle_core::errors::OracleError;
use chronicle_core::traits::ICategoryOracle;

/// One scripted step: a reply or a failure.
pub type ScriptedReply = Result<String, OracleError>;

/// Oracle that pops one scripted reply per call.
///
/// Once the script is exhausted, every further call reports unavailable,
/// which the classifier turns into fallback labeling.
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<ScriptedReply>>,
}

impl ScriptedOracle {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    /// Shorthand for an all-success script.
    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }
}

impl ICategoryOracle for ScriptedOracle {
    fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        self.replies
            .lock()
            .expect("scripted oracle lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(OracleError::Unavailable {
                    reason: "script exhausted".to_string(),
                })
            })
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}
