//! Shared domain types for the calendar conversion.
//!
//! The raw side mirrors what the loaders can actually observe in an export
//! (native cells vs. text tokens vs. blanks); the output side is the fixed
//! eight-column schema the downstream application imports.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::AppError;

/// Which encoding the source file uses.
///
/// The two converter binaries differ only in this value: loaders branch on
/// it, and the text variant additionally prints distribution breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Spreadsheet export; date/time cells may be native values or text.
    Spreadsheet,
    /// Delimited-text export; dates as `YYYY/MM/DD`, times as `HH:MM` text.
    DelimitedText,
}

impl SourceKind {
    /// Whether the run summary includes per-currency/per-impact breakdowns.
    pub fn wants_breakdowns(self) -> bool {
        matches!(self, SourceKind::DelimitedText)
    }
}

/// A date as it appears in the source, before canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDate {
    /// A native spreadsheet date value.
    Calendar(NaiveDate),
    /// A text token, expected in `YYYY/MM/DD` or `YYYY-MM-DD` form.
    Text(String),
}

/// A time as it appears in the source.
///
/// Malformed time cells are common in real exports, so anything a loader
/// cannot classify lands in `Missing` and normalizes to the `00:00` fallback
/// instead of failing the run.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTime {
    /// A native spreadsheet time value.
    Clock(NaiveTime),
    /// A text token, expected in `HH:MM` (or `HH:MM:SS`) form.
    Text(String),
    Missing,
}

/// One unnormalized source record: the five leading columns of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// 1-based row number in the source file, for diagnostics.
    pub line: usize,
    pub date: RawDate,
    pub time: RawTime,
    pub currency: String,
    /// Single-letter severity code: `H`, `M`, `L` or `N`.
    pub impact: String,
    pub event: String,
}

/// One output record, fields in the exact column order the downstream
/// application expects. Serde field order doubles as the CSV header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputRow {
    pub date: String,
    pub time: String,
    pub currency: String,
    pub event: String,
    pub impact: String,
    /// Always empty; present for downstream schema compatibility.
    pub actual: String,
    /// Always empty; present for downstream schema compatibility.
    pub forecast: String,
    /// Always empty; present for downstream schema compatibility.
    pub previous: String,
}

impl OutputRow {
    /// Output header, in serialization order.
    pub const COLUMNS: [&'static str; 8] = [
        "Date", "Time", "Currency", "Event", "Impact", "Actual", "Forecast", "Previous",
    ];

    /// Project the five normalized fields onto the eight-column schema.
    pub fn project(
        date: String,
        time: String,
        currency: String,
        event: String,
        impact: &'static str,
    ) -> Self {
        Self {
            date,
            time,
            currency,
            event,
            impact: impact.to_string(),
            actual: String::new(),
            forecast: String::new(),
            previous: String::new(),
        }
    }
}

/// Expand a single-letter impact code to its full-word form.
///
/// The severity filter runs before this, so only `H` and `M` ever reach it
/// from the pipeline; the full table is kept because the mapping is a
/// property of the source format, not of the filter.
pub fn expand_impact(code: &str) -> Result<&'static str, AppError> {
    match code {
        "H" => Ok("HIGH"),
        "M" => Ok("MEDIUM"),
        "L" | "N" => Ok("LOW"),
        other => Err(AppError::internal(format!(
            "impact code '{other}' survived the severity filter"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_impact_maps_known_codes() {
        assert_eq!(expand_impact("H").unwrap(), "HIGH");
        assert_eq!(expand_impact("M").unwrap(), "MEDIUM");
        assert_eq!(expand_impact("L").unwrap(), "LOW");
        assert_eq!(expand_impact("N").unwrap(), "LOW");
    }

    #[test]
    fn expand_impact_rejects_unknown_codes() {
        let err = expand_impact("X").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn project_fills_placeholders_with_empty_strings() {
        let row = OutputRow::project(
            "2024-03-15".to_string(),
            "14:30".to_string(),
            "USD".to_string(),
            "Fed Rate Decision".to_string(),
            "HIGH",
        );
        assert_eq!(row.actual, "");
        assert_eq!(row.forecast, "");
        assert_eq!(row.previous, "");
        assert_eq!(row.impact, "HIGH");
    }
}
