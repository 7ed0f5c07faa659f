use serde::{Deserialize, Serialize};

/// Flavor-text line and the configuration hint it carries.
///
/// `text` is not guaranteed unique across the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerifuEntry {
    /// Category label, e.g. 通常時 or 激走
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub text: String,
    /// Free-text hint description
    #[serde(alias = "hint_note")]
    pub note: String,
}

impl SerifuEntry {
    /// Label as offered in the flavor-text picker
    pub fn display_label(&self) -> String {
        format!("{}（{}）", self.text, self.note)
    }
}
