/// Shown in place of a missing or empty person photo.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_1280.png";

/// Default base URL of the remote persons service.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Round-trip delay applied by the in-memory stores when latency
/// simulation is enabled.
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

/// Request timeout for the remote persons service.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

pub const SETTINGS_DIR_NAME: &str = "FaceWatch";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Prefix of exported detection-log CSV files.
pub const EXPORT_FILE_PREFIX: &str = "detection_logs";
