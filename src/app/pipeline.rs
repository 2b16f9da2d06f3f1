//! The shared conversion pipeline: filter -> normalize -> project.
//!
//! Both binaries funnel into this module; only the loaders differ per input
//! encoding. Everything here is per-row transformation over an in-memory
//! table, in source order.
//!
//! Failure contract:
//! - dates must canonicalize uniformly or the run aborts (nothing written)
//! - times never fail; anything unparseable becomes the `00:00` fallback
//! - impact expansion post-filter can only fail on an internal invariant

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{OutputRow, RawDate, RawEvent, RawTime, SourceKind, expand_impact};
use crate::error::AppError;
use crate::io::ingest;

/// Fallback for missing or unparseable time values.
pub const FALLBACK_TIME: &str = "00:00";

/// Everything a single conversion run produced, for the writer and reporter.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Rows read from the source, before filtering.
    pub rows_read: usize,
    /// Retained rows, normalized and projected, in source order.
    pub rows: Vec<OutputRow>,
}

impl RunOutput {
    pub fn rows_retained(&self) -> usize {
        self.rows.len()
    }

    /// Retention ratio in percent; 0 for an empty source.
    pub fn retention_pct(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            self.rows.len() as f64 / self.rows_read as f64 * 100.0
        }
    }
}

/// Load `input` with the loader for `kind` and run the full pipeline.
pub fn run(kind: SourceKind, input: &Path) -> Result<RunOutput, AppError> {
    let raw = ingest::load_events(kind, input)?;
    let rows_read = raw.len();

    let mut rows = Vec::new();
    for event in filter_severity(raw) {
        rows.push(normalize_event(&event)?);
    }

    Ok(RunOutput { rows_read, rows })
}

/// Keep only rows whose raw impact code is exactly `H` or `M`, preserving
/// source order. Anything else, including blanks, is dropped silently.
pub fn filter_severity(events: Vec<RawEvent>) -> Vec<RawEvent> {
    events
        .into_iter()
        .filter(|e| matches!(e.impact.trim(), "H" | "M"))
        .collect()
}

/// Normalize one retained row and project it onto the output schema.
///
/// A date that does not canonicalize is fatal for the whole run: the output
/// is only correct if every date is uniform, so we report the row and stop
/// rather than emit a partially-normalized file.
pub fn normalize_event(event: &RawEvent) -> Result<OutputRow, AppError> {
    let date = normalize_date(&event.date)
        .map_err(|msg| AppError::new(3, format!("Row {}: {msg}", event.line)))?;
    let time = normalize_time(&event.time);
    let impact = expand_impact(event.impact.trim())?;
    Ok(OutputRow::project(
        date,
        time,
        event.currency.clone(),
        event.event.clone(),
        impact,
    ))
}

/// Canonicalize a raw date to `YYYY-MM-DD`.
pub fn normalize_date(raw: &RawDate) -> Result<String, String> {
    match raw {
        RawDate::Calendar(d) => Ok(d.format("%Y-%m-%d").to_string()),
        RawDate::Text(s) => {
            let s = s.trim();
            for fmt in ["%Y/%m/%d", "%Y-%m-%d"] {
                if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                    return Ok(d.format("%Y-%m-%d").to_string());
                }
            }
            Err(format!("unrecognized date value '{s}'"))
        }
    }
}

/// Canonicalize a raw time to zero-padded 24-hour `HH:MM`.
///
/// Total by design: malformed time cells are common in real exports and must
/// not abort the run, so every non-time value maps to [`FALLBACK_TIME`].
///
/// Text is not passed through verbatim: `HH:MM`/`HH:MM:SS` tokens are
/// re-rendered as `HH:MM` (so `"14:30:00"` becomes `"14:30"` and `"9:05"`
/// becomes `"09:05"`), and anything else becomes the fallback. Every output
/// time therefore matches the canonical pattern; already-canonical text
/// round-trips unchanged.
pub fn normalize_time(raw: &RawTime) -> String {
    match raw {
        RawTime::Clock(t) => t.format("%H:%M").to_string(),
        RawTime::Text(s) => {
            let s = s.trim();
            for fmt in ["%H:%M", "%H:%M:%S"] {
                if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
                    return t.format("%H:%M").to_string();
                }
            }
            FALLBACK_TIME.to_string()
        }
        RawTime::Missing => FALLBACK_TIME.to_string(),
    }
}
