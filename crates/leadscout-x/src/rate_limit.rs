//! Wait-on-rate-limit policy for the X and `OpenAI` clients.
//!
//! A throttled request blocks until the platform's reset time and is then
//! re-sent. Nothing else is retried: transport, auth and API errors go
//! straight back to the caller.

use std::future::Future;
use std::time::Duration;

use crate::error::XError;

/// Longest single wait. X rate-limit windows are 15 minutes.
const MAX_WAIT_SECS: u64 = 15 * 60;

/// Runs `operation`, waiting out [`XError::RateLimited`] responses.
///
/// Each throttle response sleeps for its `retry_after_secs` (capped at
/// [`MAX_WAIT_SECS`], plus up to one second of jitter so a freshly reset
/// window is not hit at the exact boundary) and tries again, for at most
/// `max_waits` waits. Once the waits are used up the call fails with
/// [`XError::RateLimitExhausted`].
pub(crate) async fn wait_on_rate_limit<T, F, Fut>(
    max_waits: u32,
    mut operation: F,
) -> Result<T, XError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, XError>>,
{
    let mut waits = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(XError::RateLimited {
                service,
                retry_after_secs,
            }) => {
                if waits >= max_waits {
                    return Err(XError::RateLimitExhausted { service, waits });
                }
                waits += 1;
                let wait_ms = retry_after_secs.min(MAX_WAIT_SECS).saturating_mul(1_000);
                let jitter_ms = if wait_ms == 0 {
                    0
                } else {
                    rand::random_range(0..1_000u64)
                };
                tracing::warn!(
                    service,
                    waits,
                    max_waits,
                    retry_after_secs,
                    "rate limited, waiting for reset"
                );
                tokio::time::sleep(Duration::from_millis(wait_ms + jitter_ms)).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn rate_limited() -> XError {
        XError::RateLimited {
            service: "X API",
            retry_after_secs: 0,
        }
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = wait_on_rate_limit(3, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, XError>(7)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn waits_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = wait_on_rate_limit(3, || {
            let c = Arc::clone(&c);
            async move {
                let n = c.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(rate_limited())
                } else {
                    Ok::<u32, XError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_waits() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = wait_on_rate_limit(2, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, XError>(rate_limited())
            }
        })
        .await;
        // max_waits=2 → 3 total attempts
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result,
            Err(XError::RateLimitExhausted { waits: 2, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_auth_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = wait_on_rate_limit(3, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, XError>(XError::Unauthorized {
                    service: "X API",
                    status: 401,
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(XError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn does_not_retry_deserialize_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = wait_on_rate_limit(3, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                let e = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
                Err::<u32, XError>(XError::Deserialize {
                    context: "test".to_owned(),
                    source: e,
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(XError::Deserialize { .. })));
    }

    #[tokio::test]
    async fn zero_max_waits_fails_on_first_throttle() {
        let result = wait_on_rate_limit(0, || async { Err::<u32, XError>(rate_limited()) }).await;
        assert!(matches!(
            result,
            Err(XError::RateLimitExhausted { waits: 0, .. })
        ));
    }
}
