use crate::shared::cancel::CancelToken;
use crate::shared::settings::SettingsMap;
use crate::store::domain::error::StoreError;

/// Single-slot settings persistence.
pub trait SettingsStore: Send + Sync {
    /// The persisted mapping, or an empty one if nothing was stored yet.
    fn get(&self, cancel: &CancelToken) -> Result<SettingsMap, StoreError>;

    /// Overwrites the stored blob wholesale (no partial merge) and
    /// returns what was stored.
    fn put(&self, settings: SettingsMap, cancel: &CancelToken) -> Result<SettingsMap, StoreError>;
}
