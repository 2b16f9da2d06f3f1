//! Writer: persist the output table as a headered, quoted CSV.
//!
//! The `csv` crate handles RFC-4180 quoting, so event names containing the
//! delimiter, quotes, or newlines survive a round trip into the downstream
//! application.

use std::path::Path;

use crate::domain::OutputRow;
use crate::error::AppError;

/// Write the eight-column output CSV, overwriting `path` if it exists.
///
/// The header is written even when there are zero rows, so a filtered-out
/// source still yields a schema-valid file.
pub fn write_events_csv(path: &Path, rows: &[OutputRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::new(2, format!("Failed to create output CSV '{}': {e}", path.display()))
    })?;

    if rows.is_empty() {
        // serialize() only emits the header alongside the first record, so
        // write it explicitly when there is nothing to serialize.
        writer.write_record(OutputRow::COLUMNS).map_err(|e| {
            AppError::new(2, format!("Failed to write output CSV header: {e}"))
        })?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::new(2, format!("Failed to write output CSV row: {e}")))?;
    }

    writer.flush().map_err(|e| {
        AppError::new(2, format!("Failed to flush output CSV '{}': {e}", path.display()))
    })?;
    Ok(())
}
