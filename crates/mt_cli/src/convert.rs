//! Reference dataset builder - spreadsheet CSV → JSON dataset
//!
//! The reference table is maintained as a spreadsheet and exported to CSV
//! with a header row. Columns are matched by name, either the JSON field
//! names (`situation,diff_range,start_g,exp_equal,exp_56`) or the sheet
//! labels (`状況,差枚範囲,開始G,等価,56枚`). A missing or empty
//! `diff_range` becomes `-`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use mt_core::models::{ReferenceEntry, NOT_APPLICABLE_BUCKET};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

/// Metadata written next to a converted dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Source CSV path as given
    pub source: String,
    pub row_count: usize,
    /// SHA256 of the written JSON (hex)
    pub checksum: String,
    /// RFC3339
    pub created_at: String,
}

pub fn parse_reference_reader<R: Read>(reader: R) -> Result<(Vec<ReferenceEntry>, ConversionStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut stats = ConversionStats::default();

    for (line, record) in reader.deserialize::<ReferenceEntry>().enumerate() {
        stats.total_rows += 1;
        match record {
            Ok(mut entry) => {
                if entry.diff_range.is_empty() {
                    entry.diff_range = NOT_APPLICABLE_BUCKET.to_string();
                }
                entries.push(entry);
                stats.parsed += 1;
            }
            Err(e) => {
                // +2: header row and 1-based numbering
                tracing::warn!(row = line + 2, "skipping malformed row: {e}");
                stats.failed += 1;
            }
        }
    }

    Ok((entries, stats))
}

pub fn parse_reference_csv(csv_path: &Path) -> Result<(Vec<ReferenceEntry>, ConversionStats)> {
    let file = fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    parse_reference_reader(file)
}

/// Convert `csv_path` into a JSON reference dataset at `output_json`
pub fn build_reference_dataset(
    csv_path: &Path,
    output_json: &Path,
) -> Result<(DatasetMetadata, ConversionStats)> {
    let (entries, stats) = parse_reference_csv(csv_path)?;
    if entries.is_empty() {
        anyhow::bail!("no usable rows in {}", csv_path.display());
    }

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize dataset")?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let checksum = format!("{:x}", hasher.finalize());

    if let Some(parent) = output_json.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output_json, &json)
        .with_context(|| format!("Failed to write output file: {}", output_json.display()))?;

    let metadata = DatasetMetadata {
        source: csv_path.display().to_string(),
        row_count: entries.len(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    Ok((metadata, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const CSV: &str = "situation,diff_range,start_g,exp_equal,exp_56\n\
                       朝イチ,-,0,1850,1320\n\
                       非完走後,-1000~0,200,1180,520\n\
                       通常,,400,540,-120\n";

    #[test]
    fn test_parse_field_names() {
        let (entries, stats) = parse_reference_reader(CSV.as_bytes()).unwrap();
        assert_eq!(stats, ConversionStats { total_rows: 3, parsed: 3, failed: 0 });
        assert_eq!(entries[1].diff_range, "-1000~0");
        assert_eq!(entries[2].diff_range, "-");
        assert_eq!(entries[2].exp_56, -120);
    }

    #[test]
    fn test_parse_sheet_labels_without_bucket_column() {
        let csv = "状況,開始G,等価,56枚\n完走後, 300 ,-240,-880\n";
        let (entries, _) = parse_reference_reader(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].situation, "完走後");
        assert_eq!(entries[0].start_g, 300);
        assert_eq!(entries[0].diff_range, "-");
    }

    #[test]
    fn test_malformed_rows_are_counted() {
        let csv = "situation,start_g,exp_equal,exp_56\n通常,abc,1,2\n通常,0,1,2\n";
        let (entries, stats) = parse_reference_reader(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_build_dataset_writes_json_and_checksum() -> Result<()> {
        let mut csv_file = NamedTempFile::new()?;
        csv_file.write_all(CSV.as_bytes())?;
        let dir = tempdir()?;
        let out = dir.path().join("nested/expectation_data.json");

        let (meta, stats) = build_reference_dataset(csv_file.path(), &out)?;
        assert_eq!(meta.row_count, 3);
        assert_eq!(stats.parsed, 3);
        assert_eq!(meta.checksum.len(), 64);

        let loaded = mt_core::data::load_reference_entries(&out)?;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].situation, "朝イチ");
        Ok(())
    }

    #[test]
    fn test_build_rejects_empty_input() -> Result<()> {
        let mut csv_file = NamedTempFile::new()?;
        csv_file.write_all(b"situation,start_g,exp_equal,exp_56\n")?;
        let dir = tempdir()?;
        assert!(build_reference_dataset(csv_file.path(), &dir.path().join("out.json")).is_err());
        Ok(())
    }
}
