//! Dataset health report.
//!
//! Resolvers assume `(situation, diff_range, start_g)` is unique; this
//! report lists rows that break the assumption so maintainers can fix them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ReferenceEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub situation: String,
    pub diff_range: String,
    pub start_g: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReport {
    pub total_rows: usize,
    pub rows_per_situation: BTreeMap<String, usize>,
    pub duplicate_keys: Vec<DuplicateKey>,
}

impl DatasetReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_keys.is_empty()
    }
}

pub fn dataset_report(entries: &[ReferenceEntry]) -> DatasetReport {
    let mut rows_per_situation: BTreeMap<String, usize> = BTreeMap::new();
    let mut keys: BTreeMap<(&str, &str, i64), usize> = BTreeMap::new();

    for e in entries {
        *rows_per_situation.entry(e.situation.clone()).or_default() += 1;
        *keys
            .entry((e.situation.as_str(), e.diff_range.as_str(), e.start_g))
            .or_default() += 1;
    }

    let duplicate_keys = keys
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((situation, diff_range, start_g), count)| DuplicateKey {
            situation: situation.to_string(),
            diff_range: diff_range.to_string(),
            start_g,
            count,
        })
        .collect();

    DatasetReport {
        total_rows: entries.len(),
        rows_per_situation,
        duplicate_keys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(situation: &str, bucket: &str, start_g: i64) -> ReferenceEntry {
        ReferenceEntry {
            situation: situation.to_string(),
            diff_range: bucket.to_string(),
            start_g,
            exp_equal: 0,
            exp_56: 0,
        }
    }

    #[test]
    fn test_clean_dataset() {
        let report = dataset_report(&[entry("A", "-", 0), entry("A", "-", 100), entry("B", "-", 0)]);
        assert!(report.is_clean());
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.rows_per_situation.get("A"), Some(&2));
    }

    #[test]
    fn test_duplicates_reported_once_with_count() {
        let report = dataset_report(&[
            entry("A", "-", 100),
            entry("A", "-", 100),
            entry("A", "0~500", 100),
            entry("A", "-", 100),
        ]);
        assert_eq!(
            report.duplicate_keys,
            vec![DuplicateKey {
                situation: "A".to_string(),
                diff_range: "-".to_string(),
                start_g: 100,
                count: 3,
            }]
        );
    }
}
