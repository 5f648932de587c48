//! Time-bounded provider calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::ConciergeError;

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Run `future` under `budget`, logging how long `operation` took.
///
/// Expiry becomes [`ConciergeError::Timeout`] carrying the budget in
/// milliseconds. Errors from the future itself pass through unchanged.
pub async fn with_timeout<T>(
    operation: &str,
    budget: Duration,
    future: impl Future<Output = Result<T, ConciergeError>>,
) -> Result<T, ConciergeError> {
    let started = Instant::now();
    let budget_ms = millis(budget);
    match tokio::time::timeout(budget, future).await {
        Ok(result) => {
            let elapsed_ms = millis(started.elapsed());
            debug!(operation, elapsed_ms, budget_ms, ok = result.is_ok(), "call finished");
            result
        }
        Err(_) => {
            warn!(operation, budget_ms, "call exceeded its time budget");
            Err(ConciergeError::Timeout(budget_ms))
        }
    }
}
