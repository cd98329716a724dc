use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::shared::cancel::CancelToken;
use crate::shared::constants::PLACEHOLDER_IMAGE_URL;
use crate::shared::person::{Person, PersonDraft, PersonUpdate};
use crate::store::domain::error::StoreError;
use crate::store::domain::person_store::PersonStore;
use crate::store::infrastructure::latency::Latency;

/// Process-local person roster.
///
/// Records live in a `Mutex`-guarded list so concurrent callers see a
/// consistent, monotonically-updated view; nothing is shared across
/// processes. New records are appended to the end of the list.
pub struct MemoryPersonStore {
    records: Mutex<Vec<Person>>,
    latency: Latency,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Person>) -> Self {
        Self {
            records: Mutex::new(records),
            latency: Latency::none(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Person>> {
        // A poisoned lock means a panic mid-mutation; the record list
        // itself is still structurally valid, so keep serving it.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryPersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore for MemoryPersonStore {
    fn list(&self, cancel: &CancelToken) -> Result<Vec<Person>, StoreError> {
        self.latency.pause(cancel)?;
        Ok(self.lock().clone())
    }

    fn create(&self, draft: PersonDraft, cancel: &CancelToken) -> Result<Person, StoreError> {
        self.latency.pause(cancel)?;
        let person = Person {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            status: draft.status,
            image: draft
                .image
                .filter(|uri| !uri.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            last_seen: Utc::now(),
        };
        self.lock().push(person.clone());
        Ok(person)
    }

    fn update(
        &self,
        id: &str,
        update: PersonUpdate,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError> {
        self.latency.pause(cancel)?;
        let mut records = self.lock();
        let person = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        update.apply_to(person);
        Ok(person.clone())
    }

    fn delete(&self, id: &str, cancel: &CancelToken) -> Result<(), StoreError> {
        self.latency.pause(cancel)?;
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    fn mark_seen(&self, id: &str, cancel: &CancelToken) -> Result<Person, StoreError> {
        self.latency.pause(cancel)?;
        let mut records = self.lock();
        let person = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        person.last_seen = Utc::now();
        Ok(person.clone())
    }
}
