use std::sync::Mutex;

use crate::shared::cancel::CancelToken;
use crate::shared::settings::SettingsMap;
use crate::store::domain::error::StoreError;
use crate::store::domain::settings_store::SettingsStore;
use crate::store::infrastructure::latency::Latency;

/// Settings slot held in process memory; nothing survives a restart.
pub struct MemorySettingsStore {
    slot: Mutex<SettingsMap>,
    latency: Latency,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(SettingsMap::new()),
            latency: Latency::none(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, cancel: &CancelToken) -> Result<SettingsMap, StoreError> {
        self.latency.pause(cancel)?;
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn put(&self, settings: SettingsMap, cancel: &CancelToken) -> Result<SettingsMap, StoreError> {
        self.latency.pause(cancel)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = settings.clone();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, serde_json::Value)]) -> SettingsMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_get_before_any_put_is_empty() {
        let store = MemorySettingsStore::new();
        assert!(store.get(&CancelToken::new()).unwrap().is_empty());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = MemorySettingsStore::new();
        let cancel = CancelToken::new();
        let settings = map(&[("sensitivity", json!(0.8)), ("alerts", json!(true))]);

        store.put(settings.clone(), &cancel).unwrap();

        assert_eq!(store.get(&cancel).unwrap(), settings);
    }

    #[test]
    fn test_put_overwrites_wholesale() {
        let store = MemorySettingsStore::new();
        let cancel = CancelToken::new();

        store
            .put(map(&[("alerts", json!(true))]), &cancel)
            .unwrap();
        store
            .put(map(&[("sensitivity", json!(0.5))]), &cancel)
            .unwrap();

        let stored = store.get(&cancel).unwrap();
        assert!(stored.get("alerts").is_none());
        assert_eq!(stored.get("sensitivity"), Some(&json!(0.5)));
    }
}
