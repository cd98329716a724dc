use crate::shared::cancel::CancelToken;
use crate::shared::constants::PLACEHOLDER_IMAGE_URL;
use crate::shared::detection_log::{DetectionLog, DetectionLogDraft};
use crate::shared::person::{Person, PersonDraft, PersonUpdate};
use crate::shared::settings::SettingsMap;
use crate::store::domain::error::StoreError;
use crate::store::domain::log_store::DetectionLogStore;
use crate::store::domain::person_store::PersonStore;
use crate::store::domain::settings_store::SettingsStore;

/// Uniform operation set over the person roster, the detection log,
/// and the settings slot.
///
/// Backends are injected at construction and never visible to callers.
/// The facade holds no records of its own: it validates payloads,
/// applies the image-placeholder fallback on the read path, logs every
/// failure, and re-raises it unchanged for the caller to surface.
pub struct DataFacade {
    persons: Box<dyn PersonStore>,
    logs: Box<dyn DetectionLogStore>,
    settings: Box<dyn SettingsStore>,
}

impl DataFacade {
    pub fn new(
        persons: Box<dyn PersonStore>,
        logs: Box<dyn DetectionLogStore>,
        settings: Box<dyn SettingsStore>,
    ) -> Self {
        Self {
            persons,
            logs,
            settings,
        }
    }

    pub fn list_persons(&self, cancel: &CancelToken) -> Result<Vec<Person>, StoreError> {
        let mut persons = log_failure("list persons", self.persons.list(cancel))?;
        for person in &mut persons {
            apply_image_fallback(person);
        }
        Ok(persons)
    }

    pub fn create_person(
        &self,
        draft: PersonDraft,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError> {
        validate_name(&draft.name)?;
        let mut person = log_failure("create person", self.persons.create(draft, cancel))?;
        apply_image_fallback(&mut person);
        Ok(person)
    }

    pub fn update_person(
        &self,
        id: &str,
        update: PersonUpdate,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        let mut person = log_failure("update person", self.persons.update(id, update, cancel))?;
        apply_image_fallback(&mut person);
        Ok(person)
    }

    pub fn delete_person(&self, id: &str, cancel: &CancelToken) -> Result<(), StoreError> {
        log_failure("delete person", self.persons.delete(id, cancel))
    }

    /// Refreshes the person's `last_seen`; used by the detection path.
    pub fn mark_person_seen(
        &self,
        id: &str,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError> {
        let mut person = log_failure("mark person seen", self.persons.mark_seen(id, cancel))?;
        apply_image_fallback(&mut person);
        Ok(person)
    }

    pub fn list_detection_logs(
        &self,
        cancel: &CancelToken,
    ) -> Result<Vec<DetectionLog>, StoreError> {
        log_failure("list detection logs", self.logs.list(cancel))
    }

    pub fn create_detection_log(
        &self,
        draft: DetectionLogDraft,
        cancel: &CancelToken,
    ) -> Result<DetectionLog, StoreError> {
        log_failure("create detection log", self.logs.create(draft, cancel))
    }

    pub fn get_settings(&self, cancel: &CancelToken) -> Result<SettingsMap, StoreError> {
        log_failure("get settings", self.settings.get(cancel))
    }

    pub fn put_settings(
        &self,
        settings: SettingsMap,
        cancel: &CancelToken,
    ) -> Result<SettingsMap, StoreError> {
        log_failure("put settings", self.settings.put(settings, cancel))
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::validation("person name must not be empty"));
    }
    Ok(())
}

/// A record read back with no usable photo renders as the placeholder.
fn apply_image_fallback(person: &mut Person) {
    if person.image.trim().is_empty() {
        person.image = PLACEHOLDER_IMAGE_URL.to_string();
    }
}

fn log_failure<T>(operation: &str, result: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(e) = &result {
        log::error!("{operation} failed: {e}");
    }
    result
}
