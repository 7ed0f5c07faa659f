//! mt_cli library
//!
//! Reference-dataset conversion (CSV → JSON with metadata), terminal
//! rendering of evaluation responses, and logging setup for the `mt` binary.

pub mod convert;
pub mod logging;
pub mod render;

pub use convert::{build_reference_dataset, parse_reference_csv, ConversionStats, DatasetMetadata};
pub use render::{render_hints, render_response};
