use serde::{Deserialize, Serialize};

/// Bucket token meaning "no difference-range split applies"
pub const NOT_APPLICABLE_BUCKET: &str = "-";

fn default_bucket() -> String {
    NOT_APPLICABLE_BUCKET.to_string()
}

/// One row of the reference dataset.
///
/// Loaded once and read-only afterwards. Rows sharing a `situation` are
/// expected to have distinct `start_g` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Primary lookup key (machine state or situation label)
    #[serde(alias = "状況", alias = "状態")]
    pub situation: String,
    /// Secondary key used by the simple strategy
    #[serde(default = "default_bucket", alias = "差枚範囲")]
    pub diff_range: String,
    /// Spin count this row applies from
    #[serde(alias = "開始G", alias = "G数")]
    pub start_g: i64,
    /// Expected value in yen at the par (equal) exchange rate
    #[serde(alias = "等価")]
    pub exp_equal: i64,
    /// Expected value in yen at the 56-unit exchange rate
    #[serde(alias = "56枚")]
    pub exp_56: i64,
}

/// Key the resolvers match reference rows against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub situation: String,
    pub diff_range: String,
}

impl LookupKey {
    pub fn new(situation: impl Into<String>, diff_range: impl Into<String>) -> Self {
        Self {
            situation: situation.into(),
            diff_range: diff_range.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_and_extra_fields() {
        let entry: ReferenceEntry = serde_json::from_str(
            r#"{"situation":"朝イチ","diff_range":"-","start_g":100,"exp_equal":1500,"exp_56":1100,"memo":"x"}"#,
        )
        .unwrap();
        assert_eq!(entry.situation, "朝イチ");
        assert_eq!(entry.start_g, 100);
        assert_eq!(entry.exp_56, 1100);
    }

    #[test]
    fn test_japanese_aliases_and_default_bucket() {
        let entry: ReferenceEntry = serde_json::from_str(
            r#"{"状況":"完走後","開始G":300,"等価":-200,"56枚":-650}"#,
        )
        .unwrap();
        assert_eq!(entry.situation, "完走後");
        assert_eq!(entry.diff_range, NOT_APPLICABLE_BUCKET);
        assert_eq!(entry.exp_equal, -200);
        assert_eq!(entry.exp_56, -650);
    }

    #[test]
    fn test_missing_value_field_is_rejected() {
        let parsed: Result<ReferenceEntry, _> =
            serde_json::from_str(r#"{"situation":"通常","start_g":0,"exp_equal":10}"#);
        assert!(parsed.is_err());
    }
}
