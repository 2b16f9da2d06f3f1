//! Loaders: turn a source file into an in-memory table of `RawEvent`s.
//!
//! Two variants, one contract: the first five columns of the export are
//! Date, Time, Currency, Impact, Event, with no header row. Columns past the
//! fifth are ignored. Both variants keep 1-based source row numbers so fatal
//! normalization errors can point at the offending row.
//!
//! Loaders classify cells but do not canonicalize them; strictness about
//! date formats lives in the pipeline, where a failure can be reported with
//! row context and abort the run before anything is written.

use std::fs::File;
use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};

use crate::domain::{RawDate, RawEvent, RawTime, SourceKind};
use crate::error::AppError;

/// Read the five-column event table from `path` using the loader for `kind`.
pub fn load_events(kind: SourceKind, path: &Path) -> Result<Vec<RawEvent>, AppError> {
    match kind {
        SourceKind::Spreadsheet => read_xlsx_events(path),
        SourceKind::DelimitedText => read_csv_events(path),
    }
}

/// Spreadsheet loader: first worksheet, no header row.
fn read_xlsx_events(path: &Path) -> Result<Vec<RawEvent>, AppError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        AppError::new(2, format!("Failed to open spreadsheet '{}': {e}", path.display()))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::new(3, format!("No worksheet found in '{}'", path.display())))?
        .map_err(|e| {
            AppError::new(3, format!("Failed to read worksheet in '{}': {e}", path.display()))
        })?;

    let mut events = Vec::new();
    for (idx, row) in range.rows().enumerate() {
        let line = idx + 1;
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        if row.len() < 5 {
            return Err(AppError::new(
                3,
                format!("Row {line} of '{}' has fewer than five columns", path.display()),
            ));
        }
        events.push(RawEvent {
            line,
            date: raw_date_cell(&row[0]),
            time: raw_time_cell(&row[1]),
            currency: cell_text(&row[2]).unwrap_or_default(),
            impact: cell_text(&row[3]).unwrap_or_default(),
            event: cell_text(&row[4]).unwrap_or_default(),
        });
    }
    Ok(events)
}

/// Delimited-text loader: headerless CSV, flexible width, trimmed fields.
fn read_csv_events(path: &Path) -> Result<Vec<RawEvent>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut events = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::new(3, format!("CSV parse error in '{}': {e}", path.display()))
        })?;
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if record.len() < 5 {
            return Err(AppError::new(
                3,
                format!("Line {line} of '{}' has fewer than five columns", path.display()),
            ));
        }

        // Some tools emit UTF-8 CSVs with a BOM prefix on the very first
        // field (e.g. "\u{feff}2024/03/15"); strip it or the date parse
        // fails on row 1 only.
        let date = record[0].trim_start_matches('\u{feff}').to_string();
        let time = &record[1];
        events.push(RawEvent {
            line,
            date: RawDate::Text(date),
            time: if time.is_empty() {
                RawTime::Missing
            } else {
                RawTime::Text(time.to_string())
            },
            currency: record[2].to_string(),
            impact: record[3].to_string(),
            event: record[4].to_string(),
        });
    }
    Ok(events)
}

/// Classify a Date cell: native date values keep their calendar date,
/// everything else is carried as text for the normalizer to judge.
fn raw_date_cell(cell: &Data) -> RawDate {
    if let Some(dt) = cell.as_datetime() {
        return RawDate::Calendar(dt.date());
    }
    RawDate::Text(cell_text(cell).unwrap_or_default())
}

/// Classify a Time cell. Unclassifiable cells become `Missing`, which the
/// normalizer renders as the `00:00` fallback.
fn raw_time_cell(cell: &Data) -> RawTime {
    if let Some(t) = cell.as_time() {
        return RawTime::Clock(t);
    }
    match cell_text(cell) {
        Some(s) => RawTime::Text(s),
        None => RawTime::Missing,
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => other
            .as_string()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    }
}
