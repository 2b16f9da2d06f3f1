//! `ecal-convert` library crate.
//!
//! The binaries (`ecal-xlsx`, `ecal-csv`) are thin wrappers around this
//! library so that:
//!
//! - core logic is testable without spawning processes
//! - the two input encodings share one filter/normalize/project pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
