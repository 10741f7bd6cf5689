//! Bounded retry for unary identity calls.

use std::future::Future;
use std::time::Duration;
use tonic::{Code, Status};
use tracing::warn;

const BASE_BACKOFF: Duration = Duration::from_millis(50);
const MAX_BACKOFF: Duration = Duration::from_secs(1);

/// Status codes worth another attempt.
pub fn is_transient(code: Code) -> bool {
    matches!(code, Code::DeadlineExceeded | Code::Aborted | Code::NotFound)
}

/// Delay before the attempt following `attempt`, doubling from
/// `BASE_BACKOFF` up to `MAX_BACKOFF`.
fn backoff(attempt: u32) -> Duration {
    let factor = 1u32 << attempt.saturating_sub(1).min(16);
    BASE_BACKOFF.saturating_mul(factor).min(MAX_BACKOFF)
}

/// Run `call` up to `attempts` times, each bounded by `per_attempt`.
///
/// Only transient codes are retried, after an exponential backoff; any
/// other status, or the last transient one, is returned as-is. An attempt that exceeds
/// `per_attempt` counts as `DEADLINE_EXCEEDED`. Dropping the returned
/// future drops the in-flight attempt.
pub async fn retry_transient<T, F, Fut>(
    attempts: u32,
    per_attempt: Duration,
    mut call: F,
) -> Result<T, Status>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Status>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let outcome = match tokio::time::timeout(per_attempt, call()).await {
            Ok(result) => result,
            Err(_) => Err(Status::deadline_exceeded("attempt timed out")),
        };

        match outcome {
            Err(status) if attempt < attempts && is_transient(status.code()) => {
                let delay = backoff(attempt);
                warn!(
                    attempt,
                    attempts,
                    code = ?status.code(),
                    delay_ms = delay.as_millis() as u64,
                    "identity call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}
