//! Bounded wait around provider calls.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{Result, StatsError};

/// Default upper bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `fut` for at most `limit`.
///
/// On expiry the future is dropped and its result discarded; the request is
/// not retried.
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(timeout_ms = limit.as_millis() as u64, "stats provider call timed out");
            Err(StatsError::Timeout {
                seconds: limit.as_secs(),
            })
        }
    }
}
