use std::thread;
use std::time::Duration;

use crate::shared::cancel::CancelToken;
use crate::shared::constants::DEFAULT_SIMULATED_LATENCY_MS;
use crate::store::domain::error::StoreError;

/// Poll interval during a pause; bounds how late a cancellation is seen.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Artificial round-trip delay for the in-memory stores.
///
/// The local mock backend the dashboard started from slept on every
/// call to mimic a remote service; keeping that behavior configurable
/// lets tests run instantly and demos feel realistic. `pause` checks
/// the cancel token at least once even with zero delay, so every store
/// operation has a cancellation point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    /// No delay; the default for embedding and tests.
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The mock backend's observed round-trip delay.
    pub const fn simulated() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }

    pub fn pause(&self, cancel: &CancelToken) -> Result<(), StoreError> {
        let mut remaining = self.delay;
        loop {
            if cancel.is_cancelled() {
                return Err(StoreError::Cancelled);
            }
            if remaining.is_zero() {
                return Ok(());
            }
            let step = remaining.min(POLL_INTERVAL);
            thread::sleep(step);
            remaining -= step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_zero_delay_completes_immediately() {
        let latency = Latency::none();
        assert!(latency.pause(&CancelToken::new()).is_ok());
    }

    #[test]
    fn test_zero_delay_still_observes_cancellation() {
        let token = CancelToken::new();
        token.cancel();
        let result = Latency::none().pause(&token);
        assert!(matches!(result, Err(StoreError::Cancelled)));
    }

    #[test]
    fn test_pause_sleeps_for_roughly_the_delay() {
        let latency = Latency::new(Duration::from_millis(30));
        let start = Instant::now();
        latency.pause(&CancelToken::new()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_cancelled_pause_returns_before_full_delay() {
        let token = CancelToken::new();
        token.cancel();
        let latency = Latency::new(Duration::from_secs(5));
        let start = Instant::now();
        let result = latency.pause(&token);
        assert!(matches!(result, Err(StoreError::Cancelled)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_simulated_uses_default_delay() {
        let latency = Latency::simulated();
        assert_eq!(
            latency.delay,
            Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS)
        );
    }
}
