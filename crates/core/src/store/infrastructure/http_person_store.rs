use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::shared::cancel::CancelToken;
use crate::shared::constants::HTTP_TIMEOUT_SECS;
use crate::shared::person::{Person, PersonDraft, PersonUpdate};
use crate::store::domain::error::StoreError;
use crate::store::domain::person_store::PersonStore;

/// Person roster backed by the remote HTTP service.
///
/// Endpoints follow the `<base>/persons` collection layout: GET lists,
/// POST creates, PUT `persons/{id}` applies a partial update, DELETE
/// removes. A 2xx response carries the entity (or entities) as JSON;
/// 404 on an id-addressed call maps to `NotFound`, every other failure
/// (network, non-2xx status, malformed body) to `Transport`.
///
/// The cancel token is checked before a request is dispatched; an
/// issued request cannot be aborted and runs to completion, bounded by
/// the client timeout.
pub struct HttpPersonStore {
    base_url: String,
    client: Client,
}

impl HttpPersonStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/persons", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/persons/{id}", self.base_url)
    }

    /// Maps the response for an id-addressed call: 404 is the caller's
    /// id being unknown, anything else non-2xx is a transport failure.
    fn read_record<T: DeserializeOwned>(response: Response, id: &str) -> Result<T, StoreError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(id));
        }
        let response = response
            .error_for_status()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        response
            .json()
            .map_err(|e| StoreError::transport(format!("malformed response: {e}")))
    }

    fn ensure_live(cancel: &CancelToken) -> Result<(), StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        Ok(())
    }
}

impl PersonStore for HttpPersonStore {
    fn list(&self, cancel: &CancelToken) -> Result<Vec<Person>, StoreError> {
        Self::ensure_live(cancel)?;
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .map_err(|e| StoreError::transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        response
            .json()
            .map_err(|e| StoreError::transport(format!("malformed response: {e}")))
    }

    fn create(&self, draft: PersonDraft, cancel: &CancelToken) -> Result<Person, StoreError> {
        Self::ensure_live(cancel)?;
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .map_err(|e| StoreError::transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        response
            .json()
            .map_err(|e| StoreError::transport(format!("malformed response: {e}")))
    }

    fn update(
        &self,
        id: &str,
        update: PersonUpdate,
        cancel: &CancelToken,
    ) -> Result<Person, StoreError> {
        Self::ensure_live(cancel)?;
        let response = self
            .client
            .put(self.record_url(id))
            .json(&update)
            .send()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        Self::read_record(response, id)
    }

    fn delete(&self, id: &str, cancel: &CancelToken) -> Result<(), StoreError> {
        Self::ensure_live(cancel)?;
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(id));
        }
        response
            .error_for_status()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        Ok(())
    }

    fn mark_seen(&self, id: &str, cancel: &CancelToken) -> Result<Person, StoreError> {
        Self::ensure_live(cancel)?;
        // The service treats lastSeen as any other updatable field, so
        // the refresh is a partial update carrying only the new instant.
        let body = serde_json::json!({ "lastSeen": Utc::now() });
        let response = self
            .client
            .put(self.record_url(id))
            .json(&body)
            .send()
            .map_err(|e| StoreError::transport(e.to_string()))?;
        Self::read_record(response, id)
    }
}
