//! Input/output helpers.
//!
//! - source loaders, one per input encoding (`ingest`)
//! - output CSV writer (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
