use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::shared::detection_log::DetectionLog;

/// Filter criteria for detection log records.
///
/// Criteria are conjunctive and each applies only when present and
/// non-empty. Both date bounds are date-only and resolve to local
/// midnight of the given day, matching the dashboard's date pickers:
/// a `start_date` includes everything from that day onward, while an
/// `end_date` cuts at the start of that day, excluding later records
/// on the same date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl LogFilter {
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    pub fn matches(&self, record: &DetectionLog) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !record
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.timestamp < local_midnight(start) {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.timestamp > local_midnight(end) {
                return false;
            }
        }
        true
    }
}

/// Stable conjunctive filter over the full record sequence.
///
/// Keeps every record matching all present criteria, preserving the
/// input's relative order; no re-sort, no incremental diffing. Empty
/// criteria return a copy of the whole sequence. Always recomputed in
/// full; the datasets are small enough that nothing smarter pays off.
pub fn filter_logs(records: &[DetectionLog], filter: &LogFilter) -> Vec<DetectionLog> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&naive).earliest() {
        Some(instant) => instant.with_timezone(&Utc),
        // Midnight erased by a DST gap; UTC midnight is the closest
        // well-defined instant.
        None => Utc.from_utc_datetime(&naive),
    }
}
