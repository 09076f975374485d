use leadscout_pipeline::{ExternalCallError, FatalInitError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {service} (retry after {retry_after_secs}s)")]
    RateLimited {
        service: &'static str,
        retry_after_secs: u64,
    },

    #[error("rate limit on {service} persisted after {waits} waits")]
    RateLimitExhausted { service: &'static str, waits: u32 },

    #[error("{service} rejected credentials (HTTP {status})")]
    Unauthorized { service: &'static str, status: u16 },

    #[error("unexpected HTTP status {status} from {service}: {body}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} returned an empty completion")]
    EmptyCompletion { service: &'static str },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<XError> for ExternalCallError {
    fn from(err: XError) -> Self {
        match err {
            XError::Http(e) => ExternalCallError::Transport(e.to_string()),
            XError::Unauthorized { .. } => ExternalCallError::Auth(err.to_string()),
            XError::RateLimitExhausted { waits, .. } => {
                ExternalCallError::RateLimitExhausted { waits }
            }
            XError::RateLimited { .. }
            | XError::Deserialize { .. }
            | XError::UnexpectedStatus { .. }
            | XError::EmptyCompletion { .. }
            | XError::InvalidBaseUrl { .. } => ExternalCallError::Api(err.to_string()),
        }
    }
}

impl From<XError> for FatalInitError {
    fn from(err: XError) -> Self {
        FatalInitError(err.to_string())
    }
}
