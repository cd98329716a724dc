use crate::shared::cancel::CancelToken;
use crate::shared::detection_log::{DetectionLog, DetectionLogDraft};
use crate::store::domain::error::StoreError;

/// Append-only store of detection events.
///
/// No update or delete is exposed; the sequence only grows.
pub trait DetectionLogStore: Send + Sync {
    /// Records ordered most-recent-first by insertion.
    fn list(&self, cancel: &CancelToken) -> Result<Vec<DetectionLog>, StoreError>;

    /// Assigns the next sequential id and the current timestamp, then
    /// inserts the record at the head of the sequence.
    fn create(
        &self,
        draft: DetectionLogDraft,
        cancel: &CancelToken,
    ) -> Result<DetectionLog, StoreError>;
}
