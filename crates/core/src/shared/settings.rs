/// Open key/value settings mapping, persisted as one JSON blob under a
/// single well-known slot. No schema is enforced at this layer; the
/// stores round-trip whatever mapping they are given.
pub type SettingsMap = serde_json::Map<String, serde_json::Value>;
