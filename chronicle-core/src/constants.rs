/// Chronicle system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of categories the oracle is asked to pick per event (upper bound
/// stated in the prompt; replies with more valid indices are kept as-is).
pub const REQUESTED_LABELS_PER_EVENT: usize = 3;

/// Hard cap on concurrent oracle calls. The oracle is a shared,
/// resource-intensive external process.
pub const MAX_CLASSIFY_WORKERS: usize = 4;

/// How many characters of an unparsable oracle reply are echoed in
/// diagnostics.
pub const DIAGNOSTIC_REPLY_PREVIEW: usize = 50;
