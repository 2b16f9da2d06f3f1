//! Top-level application orchestration.
//!
//! The binaries are intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the load/filter/normalize/project pipeline
//! - writes the output CSV
//! - prints the run summary and breakdowns

use clap::Parser;

use crate::cli::ConvertArgs;
use crate::domain::SourceKind;
use crate::error::AppError;

pub mod pipeline;

/// Entry point shared by the `ecal-xlsx` and `ecal-csv` binaries.
pub fn run(kind: SourceKind) -> Result<(), AppError> {
    let args = ConvertArgs::parse();
    run_with_args(kind, &args)
}

/// The run itself, separated from argv parsing so tests can drive it.
pub fn run_with_args(kind: SourceKind, args: &ConvertArgs) -> Result<(), AppError> {
    if !args.input.is_file() {
        return Err(AppError::new(
            2,
            format!("Input file '{}' does not exist", args.input.display()),
        ));
    }
    let output = args.output_path();

    let run = pipeline::run(kind, &args.input)?;

    // Zero retained rows is a warning, not an error: the writer still emits
    // the header so downstream imports see a schema-valid file.
    if run.rows.is_empty() {
        eprintln!(
            "Warning: no MEDIUM/HIGH events found in '{}'",
            args.input.display()
        );
    }

    crate::io::export::write_events_csv(&output, &run.rows)?;

    println!("{}", crate::report::format_run_summary(&run, &output));
    if kind.wants_breakdowns() && !run.rows.is_empty() {
        println!("{}", crate::report::format_breakdowns(&run.rows));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::path::PathBuf;

    #[test]
    fn missing_input_fails_before_parsing() {
        let args = ConvertArgs {
            input: PathBuf::from("/nonexistent/calendar.csv"),
            output: None,
        };
        let err = run_with_args(SourceKind::DelimitedText, &args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/nonexistent/calendar.csv"));
    }

    #[test]
    fn end_to_end_csv_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calendar.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "2024/03/15,09:00,EUR,M,ECB Statement").unwrap();
        writeln!(file, "2024/03/15,10:30,USD,L,Crude Oil Inventories").unwrap();
        writeln!(file, "2024/03/15,14:30,USD,H,Fed Rate Decision").unwrap();
        drop(file);

        let args = ConvertArgs { input: input.clone(), output: None };
        run_with_args(SourceKind::DelimitedText, &args).unwrap();

        let out = dir.path().join("calendar_filtered.csv");
        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Date,Time,Currency,Event,Impact,Actual,Forecast,Previous");
        assert_eq!(lines[1], "2024-03-15,09:00,EUR,ECB Statement,MEDIUM,,,");
        assert_eq!(lines[2], "2024-03-15,14:30,USD,Fed Rate Decision,HIGH,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn zero_matches_still_write_a_headered_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calendar.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "2024/03/15,10:30,USD,L,Crude Oil Inventories").unwrap();
        drop(file);

        let output = dir.path().join("out.csv");
        let args = ConvertArgs { input, output: Some(output.clone()) };
        run_with_args(SourceKind::DelimitedText, &args).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            content.trim_end(),
            "Date,Time,Currency,Event,Impact,Actual,Forecast,Previous"
        );
    }

    #[test]
    fn rerunning_the_pipeline_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calendar.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "2024/03/15,09:00,EUR,M,ECB Statement").unwrap();
        writeln!(file, "2024/03/15,14:30,USD,H,\"CPI, core (YoY)\"").unwrap();
        drop(file);

        let output = dir.path().join("out.csv");
        let args = ConvertArgs { input, output: Some(output.clone()) };

        run_with_args(SourceKind::DelimitedText, &args).unwrap();
        let first = std::fs::read(&output).unwrap();
        run_with_args(SourceKind::DelimitedText, &args).unwrap();
        let second = std::fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bad_dates_abort_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("calendar.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "2024/03/15,09:00,EUR,M,ECB Statement").unwrap();
        writeln!(file, "March 16th,09:00,EUR,M,Bundesbank Speech").unwrap();
        drop(file);

        let output = dir.path().join("out.csv");
        let args = ConvertArgs { input, output: Some(output.clone()) };
        let err = run_with_args(SourceKind::DelimitedText, &args).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }
}
