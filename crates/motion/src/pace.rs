//! Async pauses with randomized duration.
//!
//! These sleeps are cosmetic timing realism, never a backoff: nothing in the
//! engine retries. They are also the only suspension points besides port
//! calls.

use std::time::Duration;

use crate::sample::rand_int;

/// Suspend for exactly `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Suspend for a uniformly sampled duration in `[min_ms, max_ms]`.
pub async fn sleep_range(min_ms: u64, max_ms: u64) {
    sleep_ms(rand_int(min_ms as i64, max_ms as i64) as u64).await;
}
