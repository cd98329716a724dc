pub mod cancel;
pub mod constants;
pub mod detection_log;
pub mod person;
pub mod settings;
