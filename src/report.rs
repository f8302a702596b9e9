//! Summary report with a fixed `Metric, Value` layout.
//!
//! [`SummaryReport`] snapshots the eight headline metrics for one
//! selection so the surrounding layer can render or download them. With
//! the `csv-report` feature the report serializes to comma-delimited CSV
//! with a `Metric,Value` header.

use serde::Serialize;

use crate::record::MessageRecord;
use crate::stats::{self, UserFilter};

/// Value shown for argmax metrics when the filtered set has no usable
/// calendar data.
const NO_DATA: &str = "N/A";

/// Snapshot of the headline metrics for one selection.
///
/// Every field is read through the same [`UserFilter`]; filtered and
/// unfiltered aggregates are never mixed within one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// The selection label ("Overall" or a sender name).
    pub user: String,
    /// Messages after the filter.
    pub total_messages: usize,
    /// Whitespace-delimited tokens across all bodies.
    pub total_words: usize,
    /// Media-placeholder records.
    pub media_shared: usize,
    /// URL-shaped substrings across all bodies.
    pub links_shared: usize,
    /// Busiest day of week, if any calendar data exists.
    pub most_active_day: Option<&'static str>,
    /// Busiest month, if any calendar data exists.
    pub most_active_month: Option<&'static str>,
    /// Hour of day with the most messages, if any calendar data exists.
    pub peak_hour: Option<u32>,
}

impl SummaryReport {
    /// Computes the report for one selection.
    pub fn build(records: &[MessageRecord], filter: &UserFilter) -> Self {
        Self {
            user: filter.label().to_owned(),
            total_messages: stats::message_count(records, filter),
            total_words: stats::word_count(records, filter),
            media_shared: stats::media_count(records, filter),
            links_shared: stats::link_count(records, filter),
            most_active_day: stats::busiest_weekday(records, filter),
            most_active_month: stats::busiest_month(records, filter),
            peak_hour: stats::peak_hour(records, filter),
        }
    }

    /// The fixed `(Metric, Value)` row layout, in report order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("User", self.user.clone()),
            ("Total Messages", self.total_messages.to_string()),
            ("Total Words", self.total_words.to_string()),
            ("Media Shared", self.media_shared.to_string()),
            ("Links Shared", self.links_shared.to_string()),
            (
                "Most Active Day",
                self.most_active_day.unwrap_or(NO_DATA).to_owned(),
            ),
            (
                "Most Active Month",
                self.most_active_month.unwrap_or(NO_DATA).to_owned(),
            ),
            (
                "Peak Hour",
                self.peak_hour
                    .map_or_else(|| NO_DATA.to_owned(), |h| h.to_string()),
            ),
        ]
    }
}

/// Serializes the report to a CSV string with a `Metric,Value` header.
#[cfg(feature = "csv-report")]
pub fn to_csv_string(report: &SummaryReport) -> crate::error::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Metric", "Value"])?;
    for (metric, value) in report.rows() {
        writer.write_record([metric, &value])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::ChatLensError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the report as a CSV file.
#[cfg(feature = "csv-report")]
pub fn write_csv(report: &SummaryReport, path: &std::path::Path) -> crate::error::Result<()> {
    std::fs::write(path, to_csv_string(report)?)?;
    Ok(())
}
