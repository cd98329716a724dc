use crate::facade::data_facade::DataFacade;
use crate::query::csv_export::to_csv;
use crate::query::log_filter::{filter_logs, LogFilter};
use crate::shared::cancel::CancelToken;
use crate::shared::detection_log::DetectionLog;
use crate::store::domain::error::StoreError;

/// Review session over the detection log.
///
/// Holds the last successfully fetched records and the active filter,
/// recomputing the visible subset in full whenever either changes.
/// A failed refresh keeps the previous records, so a transient backend
/// error never blanks out what the operator is looking at.
#[derive(Default)]
pub struct LogReview {
    records: Vec<DetectionLog>,
    filter: LogFilter,
}

impl LogReview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetches the full log. On failure the error propagates and the
    /// held records stay as they were.
    pub fn refresh(
        &mut self,
        facade: &DataFacade,
        cancel: &CancelToken,
    ) -> Result<usize, StoreError> {
        let records = facade.list_detection_logs(cancel)?;
        let count = records.len();
        self.records = records;
        Ok(count)
    }

    pub fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    /// All held records, most-recent-first as fetched.
    pub fn records(&self) -> &[DetectionLog] {
        &self.records
    }

    /// The subset matching the active filter, recomputed on every call.
    pub fn visible(&self) -> Vec<DetectionLog> {
        filter_logs(&self.records, &self.filter)
    }

    /// CSV of the currently visible subset.
    pub fn export_csv(&self) -> String {
        to_csv(&self.visible())
    }
}
