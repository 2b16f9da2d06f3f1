//! Command-line parsing shared by the two converter binaries.
//!
//! Both binaries expose the same surface: a required input path and an
//! optional output path. Keeping the parsing here means each binary stays a
//! one-expression wrapper around `app::run`.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Filter an economic calendar export down to MEDIUM/HIGH events.
#[derive(Debug, Parser, Clone)]
#[command(version, about = "Filter an economic calendar export down to MEDIUM/HIGH events")]
pub struct ConvertArgs {
    /// Path to the source calendar export.
    pub input: PathBuf,

    /// Destination CSV path. Defaults to `<input_stem>_filtered.csv` next to
    /// the input.
    pub output: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// `.../Calendar_2007-2025.xlsx` -> `.../Calendar_2007-2025_filtered.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("calendar");
    input.with_file_name(format!("{stem}_filtered.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        let out = default_output_path(Path::new("/data/Calendar_2007-2025.xlsx"));
        assert_eq!(out, PathBuf::from("/data/Calendar_2007-2025_filtered.csv"));
    }

    #[test]
    fn default_output_for_extensionless_input() {
        let out = default_output_path(Path::new("calendar"));
        assert_eq!(out, PathBuf::from("calendar_filtered.csv"));
    }

    #[test]
    fn explicit_output_wins() {
        let args = ConvertArgs {
            input: PathBuf::from("in.csv"),
            output: Some(PathBuf::from("out.csv")),
        };
        assert_eq!(args.output_path(), PathBuf::from("out.csv"));
    }
}
