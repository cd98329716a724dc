pub mod file_settings_store;
pub mod http_person_store;
pub mod latency;
pub mod memory_log_store;
pub mod memory_person_store;
pub mod memory_settings_store;
pub mod sample_data;
