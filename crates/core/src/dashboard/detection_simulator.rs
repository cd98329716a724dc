use rand::seq::SliceRandom;

use crate::facade::data_facade::DataFacade;
use crate::shared::cancel::CancelToken;
use crate::shared::detection_log::{DetectionLog, DetectionLogDraft};
use crate::shared::person::PersonStatus;
use crate::store::domain::error::StoreError;

/// Simulates one camera detection against the enrolled roster.
///
/// Picks a random person, appends a detection log entry carrying the
/// person's name and status as of detection time, and refreshes the
/// person's `last_seen`. A banned match is logged at warn level, the
/// signal the operator console surfaces as an alert.
pub struct DetectionSimulator<'a> {
    facade: &'a DataFacade,
}

impl<'a> DetectionSimulator<'a> {
    pub fn new(facade: &'a DataFacade) -> Self {
        Self { facade }
    }

    /// Returns the recorded event, or `None` when the roster is empty.
    pub fn execute(
        &self,
        location: &str,
        cancel: &CancelToken,
    ) -> Result<Option<DetectionLog>, StoreError> {
        let persons = self.facade.list_persons(cancel)?;
        let Some(person) = persons.choose(&mut rand::thread_rng()) else {
            return Ok(None);
        };

        if person.status == PersonStatus::Banned {
            log::warn!("banned person detected: {} at {location}", person.name);
        }

        let record = self
            .facade
            .create_detection_log(DetectionLogDraft::for_person(person, location), cancel)?;
        self.facade.mark_person_seen(&person.id, cancel)?;
        Ok(Some(record))
    }
}
