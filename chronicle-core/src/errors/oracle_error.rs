/// Classification oracle errors.
///
/// Callers of the oracle see exactly the three-way outcome
/// success / timeout / unavailable; the classifier recovers from all of
/// these locally via fallback labeling.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("oracle unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("oracle returned HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },
}
