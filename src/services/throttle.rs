//! Process-wide pacing for outbound model calls.
//!
//! Every call first takes a permit (capping how many run at once) and then
//! waits until at least `min_interval` has passed since the previous call
//! started. One `CallThrottle` is shared by all requests, so concurrent admin
//! batches are paced together.

use std::time::Duration;
use tokio::sync::{Mutex, Semaphore, SemaphorePermit};
use tokio::time::Instant;

use crate::config::GenerationConfig;

pub struct CallThrottle {
    permits: Semaphore,
    min_interval: Duration,
    last_start: Mutex<Option<Instant>>,
}

/// Held for the duration of one model call.
pub struct CallPermit<'a> {
    _permit: Option<SemaphorePermit<'a>>,
}

impl CallThrottle {
    #[must_use]
    pub fn new(max_concurrent: usize, min_interval: Duration) -> Self {
        Self {
            permits: Semaphore::new(max_concurrent.max(1)),
            min_interval,
            last_start: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(
            config.max_concurrent_calls,
            Duration::from_millis(config.min_call_interval_ms),
        )
    }

    pub async fn acquire(&self) -> CallPermit<'_> {
        // The semaphore is never closed, so acquire only fails in theory.
        let permit = self.permits.acquire().await.ok();

        if !self.min_interval.is_zero() {
            let mut last_start = self.last_start.lock().await;
            if let Some(prev) = *last_start {
                let ready_at = prev + self.min_interval;
                if ready_at > Instant::now() {
                    tokio::time::sleep_until(ready_at).await;
                }
            }
            *last_start = Some(Instant::now());
        }

        CallPermit { _permit: permit }
    }
}
