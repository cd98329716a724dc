use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation signal passed into every store operation.
///
/// Clones share one flag, so a caller can hand a clone to an in-flight
/// operation and trip it from another thread. A cancelled operation
/// fails with `StoreError::Cancelled`; a token that is never cancelled
/// changes nothing about the call's outcome.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
