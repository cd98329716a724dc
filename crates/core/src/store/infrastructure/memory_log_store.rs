use std::sync::Mutex;

use chrono::Utc;

use crate::shared::cancel::CancelToken;
use crate::shared::detection_log::{DetectionLog, DetectionLogDraft};
use crate::store::domain::error::StoreError;
use crate::store::domain::log_store::DetectionLogStore;
use crate::store::infrastructure::latency::Latency;

struct Inner {
    records: Vec<DetectionLog>,
    next_id: u64,
}

/// Process-local detection log.
///
/// Ids are assigned sequentially and new records go to the head, so
/// `list` is always most-recent-first by insertion regardless of the
/// timestamp values the records carry.
pub struct MemoryLogStore {
    inner: Mutex<Inner>,
    latency: Latency,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seeds the store; id assignment continues past the largest
    /// seeded id.
    pub fn with_records(records: Vec<DetectionLog>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { records, next_id }),
            latency: Latency::none(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionLogStore for MemoryLogStore {
    fn list(&self, cancel: &CancelToken) -> Result<Vec<DetectionLog>, StoreError> {
        self.latency.pause(cancel)?;
        Ok(self.lock().records.clone())
    }

    fn create(
        &self,
        draft: DetectionLogDraft,
        cancel: &CancelToken,
    ) -> Result<DetectionLog, StoreError> {
        self.latency.pause(cancel)?;
        let mut inner = self.lock();
        let record = DetectionLog {
            id: inner.next_id,
            name: draft.name,
            timestamp: Utc::now(),
            status: draft.status,
            location: draft.location,
        };
        inner.next_id += 1;
        inner.records.insert(0, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::person::PersonStatus;

    fn draft(name: &str) -> DetectionLogDraft {
        DetectionLogDraft {
            name: name.into(),
            status: PersonStatus::Allowed,
            location: "Lobby".into(),
        }
    }

    fn seeded_log(id: u64, name: &str) -> DetectionLog {
        DetectionLog {
            id,
            name: name.into(),
            timestamp: Utc::now(),
            status: PersonStatus::Allowed,
            location: "Lobby".into(),
        }
    }

    #[test]
    fn test_create_prepends_the_new_record() {
        let store = MemoryLogStore::new();
        let cancel = CancelToken::new();

        store.create(draft("alice"), &cancel).unwrap();
        let latest = store.create(draft("marcus"), &cancel).unwrap();

        let listed = store.list(&cancel).unwrap();
        assert_eq!(listed[0], latest);
        assert_eq!(listed[1].name, "alice");
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let store = MemoryLogStore::new();
        let cancel = CancelToken::new();

        let a = store.create(draft("alice"), &cancel).unwrap();
        let b = store.create(draft("marcus"), &cancel).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_seeded_store_continues_id_sequence() {
        let store = MemoryLogStore::with_records(vec![seeded_log(4, "alice"), seeded_log(3, "jo")]);
        let cancel = CancelToken::new();

        let created = store.create(draft("marcus"), &cancel).unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(store.list(&cancel).unwrap().len(), 3);
    }

    #[test]
    fn test_create_stamps_the_current_time() {
        let store = MemoryLogStore::new();
        let before = Utc::now();

        let created = store.create(draft("alice"), &CancelToken::new()).unwrap();

        assert!(created.timestamp >= before);
        assert!(created.timestamp <= Utc::now());
    }

    #[test]
    fn test_list_on_empty_store_is_empty() {
        let store = MemoryLogStore::new();
        assert!(store.list(&CancelToken::new()).unwrap().is_empty());
    }

    #[test]
    fn test_cancelled_create_inserts_nothing() {
        let store = MemoryLogStore::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = store.create(draft("alice"), &cancel);

        assert!(matches!(result, Err(StoreError::Cancelled)));
        assert!(store.list(&CancelToken::new()).unwrap().is_empty());
    }
}
