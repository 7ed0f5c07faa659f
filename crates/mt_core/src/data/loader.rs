//! JSON dataset loading.
//!
//! Failures are errors here; [`Datasets::load_or_empty`] is the degrading
//! entry point used at startup.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::models::{ReferenceEntry, SerifuEntry};

pub fn parse_reference_entries(json: &str) -> Result<Vec<ReferenceEntry>> {
    serde_json::from_str(json).map_err(|source| CoreError::DatasetParse {
        what: "reference",
        source,
    })
}

pub fn parse_serifu_entries(json: &str) -> Result<Vec<SerifuEntry>> {
    serde_json::from_str(json).map_err(|source| CoreError::DatasetParse {
        what: "serifu",
        source,
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CoreError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_reference_entries(path: &Path) -> Result<Vec<ReferenceEntry>> {
    parse_reference_entries(&read(path)?)
}

pub fn load_serifu_entries(path: &Path) -> Result<Vec<SerifuEntry>> {
    parse_serifu_entries(&read(path)?)
}

/// Both datasets, read-only after load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub reference: Vec<ReferenceEntry>,
    pub serifu: Vec<SerifuEntry>,
}

impl Datasets {
    pub fn new(reference: Vec<ReferenceEntry>, serifu: Vec<SerifuEntry>) -> Self {
        Self { reference, serifu }
    }

    /// Load both files; a dataset that fails to load is logged and left empty
    pub fn load_or_empty(reference_path: &Path, serifu_path: &Path) -> Self {
        let reference = load_reference_entries(reference_path).unwrap_or_else(|e| {
            tracing::warn!("reference dataset unavailable, continuing without it: {e}");
            Vec::new()
        });
        let serifu = load_serifu_entries(serifu_path).unwrap_or_else(|e| {
            tracing::warn!("serifu dataset unavailable, continuing without it: {e}");
            Vec::new()
        });
        tracing::info!(
            reference_rows = reference.len(),
            serifu_rows = serifu.len(),
            "datasets loaded"
        );
        Self { reference, serifu }
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty() && self.serifu.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_both_datasets() {
        let reference = temp_json(
            r#"[{"situation":"朝イチ","diff_range":"-","start_g":0,"exp_equal":1500,"exp_56":1000}]"#,
        );
        let serifu = temp_json(r#"[{"type":"激走","text":"行くぞ","note":"デフォルト"}]"#);

        let datasets = Datasets::load_or_empty(reference.path(), serifu.path());
        assert_eq!(datasets.reference.len(), 1);
        assert_eq!(datasets.serifu.len(), 1);
        assert_eq!(datasets.serifu[0].category, "激走");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let serifu = temp_json(r#"[{"type":"通常時","text":"a","note":"b"}]"#);
        let datasets =
            Datasets::load_or_empty(Path::new("/nonexistent/expectation_data.json"), serifu.path());
        assert!(datasets.reference.is_empty());
        assert_eq!(datasets.serifu.len(), 1);
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        let broken = temp_json("{ not json");
        let datasets = Datasets::load_or_empty(broken.path(), broken.path());
        assert!(datasets.is_empty());
    }

    #[test]
    fn test_errors_name_the_dataset() {
        let err = parse_serifu_entries("[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::DatasetParse { what: "serifu", .. }));

        let err = load_reference_entries(Path::new("/nonexistent/x.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/x.json"));
    }
}
