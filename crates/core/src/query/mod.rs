pub mod csv_export;
pub mod log_filter;
