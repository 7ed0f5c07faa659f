//! Dataset module
//!
//! - Reference and serifu JSON loading, degrading to empty on failure
//! - Load-once process-wide store
//! - Serifu lookups and the reference dataset report

pub mod loader;
pub mod report;
pub mod serifu_index;
pub mod store;

pub use loader::{
    load_reference_entries, load_serifu_entries, parse_reference_entries, parse_serifu_entries,
    Datasets,
};
pub use report::{dataset_report, DatasetReport, DuplicateKey};
pub use serifu_index::SerifuIndex;
pub use store::{DatasetStore, DATASETS};
