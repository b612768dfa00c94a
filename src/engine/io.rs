//! Bounded timeout and retry-once policy around collaborator store calls.

use std::future::Future;
use std::time::Duration;

use tokio::time;
use tracing::warn;

use crate::error::StoreError;

/// Run `op` with a timeout; on a retryable failure, back off and run it one
/// more time. Non-retryable failures surface immediately.
pub(crate) async fn with_retry<T, F, Fut>(
    io_timeout: Duration,
    backoff: Duration,
    mut op: F,
) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let first = match time::timeout(io_timeout, op()).await {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(err)) if !err.is_retryable() => return Err(err),
        Ok(Err(err)) => err,
        Err(_) => StoreError::Timeout(io_timeout),
    };

    warn!(error = %first, "store call failed, retrying once");
    time::sleep(backoff).await;

    match time::timeout(io_timeout, op()).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(io_timeout)),
    }
}
