//! Response handling shared by the X and `OpenAI` clients.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode, Url};

use crate::error::XError;

/// Wait used when a 429 carries no usable reset hint.
pub(crate) const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest error body kept in [`XError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, XError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("leadscout/0.1 (b2b-lead-discovery)")
        .build()?)
}

/// Parses `base_url` and appends `path` to it.
///
/// The base is normalised to end with exactly one slash first, so
/// `https://api.x.com/2` and `https://api.x.com/2/` both keep the `/2`
/// segment.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, XError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised)
        .and_then(|base| base.join(path))
        .map_err(|e| XError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })
}

/// Seconds to wait before retrying a throttled request.
///
/// Prefers the X `x-rate-limit-reset` epoch, then a numeric `Retry-After`,
/// then [`DEFAULT_RETRY_AFTER_SECS`]. A reset time already in the past
/// means no wait.
pub(crate) fn retry_after_secs(headers: &HeaderMap, now_epoch_secs: u64) -> u64 {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
    };

    if let Some(reset) = header_u64(RATE_LIMIT_RESET) {
        return reset.saturating_sub(now_epoch_secs);
    }
    header_u64(RETRY_AFTER.as_str()).unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Maps the response status onto [`XError`] and returns the body on 2xx.
pub(crate) async fn read_body(response: Response, service: &'static str) -> Result<String, XError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(XError::RateLimited {
            service,
            retry_after_secs: retry_after_secs(response.headers(), now_epoch_secs()),
        });
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(XError::Unauthorized {
            service,
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(XError::UnexpectedStatus {
            service,
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    Ok(response.text().await?)
}
