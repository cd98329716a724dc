use crate::shared::cancel::CancelToken;
use crate::shared::person::{Person, PersonDraft, PersonUpdate};
use crate::store::domain::error::StoreError;

/// Backend-neutral interface over the person roster.
///
/// Two interchangeable implementations exist: one backed by the remote
/// HTTP service and one by a process-local list. The facade picks one
/// at startup; callers never see which.
///
/// `last_seen` is store-assigned. Drafts and partial updates cannot
/// set it; `mark_seen` is the only refresh path.
pub trait PersonStore: Send + Sync {
    fn list(&self, cancel: &CancelToken) -> Result<Vec<Person>, StoreError>;

    /// Assigns a fresh unique id and the current time as `last_seen`.
    /// Local-backed stores append the record to the end of the list.
    fn create(&self, draft: PersonDraft, cancel: &CancelToken) -> Result<Person, StoreError>;

    /// Shallow merge of `update` over the stored record.
    fn update(
        &self,
        id: &str,
        update: PersonUpdate,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError>;

    fn delete(&self, id: &str, cancel: &CancelToken) -> Result<(), StoreError>;

    /// Refreshes `last_seen` to the store's current time. Called when a
    /// detection event matches this person.
    fn mark_seen(&self, id: &str, cancel: &CancelToken) -> Result<Person, StoreError>;
}
