use thiserror::Error;

/// A failed external search/qualification call for one query.
///
/// Never aborts a run: the runner records it as a warning and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalCallError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limit still in effect after {waits} waits")]
    RateLimitExhausted { waits: u32 },

    #[error("API error: {0}")]
    Api(String),
}

/// The search/qualification client could not be constructed. Aborts the run
/// before any query is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to initialize lead source: {0}")]
pub struct FatalInitError(pub String);
