use chrono::{DateTime, Local, Utc};

use crate::shared::constants::EXPORT_FILE_PREFIX;
use crate::shared::detection_log::DetectionLog;

/// Column names, in the order rows are written.
const CSV_HEADER: &str = "Name,Timestamp,Status,Location";

/// Human-readable timestamp format for exported rows, in local time.
const ROW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serializes detection logs to CSV.
///
/// Fixed column order `Name,Timestamp,Status,Location`; every field is
/// double-quoted and embedded quotes are doubled, so values containing
/// quotes, commas, or newlines survive a round-trip. Rows follow the
/// header, newline-joined, in the order given.
pub fn to_csv(records: &[DetectionLog]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for record in records {
        let timestamp = record
            .timestamp
            .with_timezone(&Local)
            .format(ROW_TIME_FORMAT)
            .to_string();
        let row = [
            quote(&record.name),
            quote(&timestamp),
            quote(&record.status.to_string()),
            quote(&record.location),
        ]
        .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

/// File name for an export produced at `instant`:
/// `detection_logs_<ISO-8601 instant>.csv`.
pub fn export_file_name(instant: DateTime<Utc>) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}_{}.csv",
        instant.format("%Y-%m-%dT%H:%M:%S%.3fZ")
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
