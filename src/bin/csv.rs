use std::process::ExitCode;

use ecal_convert::domain::SourceKind;

fn main() -> ExitCode {
    match ecal_convert::app::run(SourceKind::DelimitedText) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
