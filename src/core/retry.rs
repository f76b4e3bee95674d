//! Bounded retry with exponential backoff and jitter.
//!
//! Transient failures (connection errors, throttling, 5xx) are waited out up
//! to a cap on attempts and on total elapsed time. Anything else is returned
//! immediately.

use crate::error::{NhlError, Result};
use rand::Rng;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Base delay for exponential backoff.
    pub base_delay_ms: u64,
    /// Cap for a single backoff sleep.
    pub max_delay_ms: u64,
    /// Cap for the total time spent on one unit of work.
    pub max_elapsed_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            base_delay_ms: 5_000,
            max_delay_ms: 300_000,
            max_elapsed_ms: 1_800_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that never sleeps and never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
            max_delay_ms: 0,
            max_elapsed_ms: 0,
        }
    }

    /// Upper bound of the backoff window for `attempt` (1-based):
    /// `min(max_delay, base_delay * 2^(attempt-1))`.
    pub fn backoff_cap_ms(&self, attempt: u32) -> u64 {
        let exponent = attempt.saturating_sub(1);
        let multiplier = if exponent >= 32 {
            u64::MAX
        } else {
            1u64 << exponent
        };
        self.base_delay_ms
            .saturating_mul(multiplier)
            .min(self.max_delay_ms)
    }

    /// Backoff with jitter drawn from the upper half of the window, so a
    /// throttled run always waits at least half the cap.
    pub fn backoff_ms(&self, attempt: u32) -> u64 {
        let cap = self.backoff_cap_ms(attempt);
        if cap < 2 {
            cap
        } else {
            rand::thread_rng().gen_range(cap / 2..=cap)
        }
    }
}

/// Run `operation` until it succeeds, fails with a non-transient error, or
/// the policy gives up.
pub async fn retry_async<T, Fut, F>(policy: &RetryPolicy, op_name: &str, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(
                        op = op_name,
                        attempt,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(err) if !err.is_transient() => return Err(err),
            Err(err) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                if attempt >= policy.max_attempts || elapsed_ms >= policy.max_elapsed_ms {
                    warn!(op = op_name, attempt, elapsed_ms, error = %err, "giving up");
                    return Err(NhlError::RetriesExhausted {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }

                let remaining_ms = policy.max_elapsed_ms.saturating_sub(elapsed_ms);
                let backoff_ms = policy.backoff_ms(attempt).min(remaining_ms);
                warn!(op = op_name, attempt, backoff_ms, error = %err, "transient failure, pausing");

                if backoff_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                }
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay_ms: 1,
            max_delay_ms: 2,
            max_elapsed_ms: 10_000,
        }
    }

    fn throttled() -> NhlError {
        NhlError::Status {
            status: 429,
            url: "http://test".to_string(),
        }
    }

    #[test]
    fn test_backoff_schedule() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay_ms: 100,
            max_delay_ms: 1500,
            max_elapsed_ms: 10_000,
        };
        assert_eq!(policy.backoff_cap_ms(1), 100);
        assert_eq!(policy.backoff_cap_ms(2), 200);
        assert_eq!(policy.backoff_cap_ms(4), 800);
        assert_eq!(policy.backoff_cap_ms(5), 1500);
        assert_eq!(policy.backoff_cap_ms(40), 1500);

        let jittered = policy.backoff_ms(3);
        assert!((200..=400).contains(&jittered));
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_transient() {
        let mut calls = 0;
        let result = retry_async(&fast_policy(4), "test_op", || {
            calls += 1;
            let n = calls;
            async move {
                if n < 3 {
                    Err(throttled())
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let mut calls = 0;
        let result: Result<()> = retry_async(&fast_policy(3), "test_op", || {
            calls += 1;
            async { Err(throttled()) }
        })
        .await;
        assert_eq!(calls, 3);
        match result.unwrap_err() {
            NhlError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("Expected RetriesExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_transient_fails_fast() {
        let mut calls = 0;
        let result: Result<()> = retry_async(&fast_policy(5), "test_op", || {
            calls += 1;
            async {
                Err(NhlError::NotFound {
                    url: "http://test".to_string(),
                })
            }
        })
        .await;
        assert_eq!(calls, 1);
        assert!(matches!(result, Err(NhlError::NotFound { .. })));
    }
}
