use serde::{Deserialize, Serialize};

use super::reference::ReferenceEntry;

/// Recommended action for the observed machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Continue,
    Quit,
}

impl Action {
    /// Label shown on the result card
    pub fn label(self) -> &'static str {
        match self {
            Action::Continue => "続行",
            Action::Quit => "ヤメ",
        }
    }
}

/// Where the base value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSource {
    /// A reference row was matched
    Matched,
    /// The extended strategy found no rows for the state and used its placeholder
    Placeholder,
    /// No rows matched; base is 0
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    TicketColor,
    FlavorTextMarkerA,
    FlavorTextMarkerB,
    RareSymbolRate,
}

/// One correction that fired, in engine order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedCorrection {
    pub kind: CorrectionKind,
    pub amount_yen: i64,
}

/// Output of one evaluation; created per request and never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub estimated_value_yen: i64,
    pub action: Action,
    pub matched_entry: Option<ReferenceEntry>,
    pub base_value_yen: i64,
    pub base_source: BaseSource,
    pub corrections: Vec<AppliedCorrection>,
}

impl EvaluationResult {
    /// `＋1500 円` style rendering; negatives carry their own minus sign
    pub fn value_text(&self) -> String {
        format_yen(self.estimated_value_yen)
    }

    /// Which reference row fed the base value, for display next to the result
    pub fn trace(&self) -> String {
        match (&self.matched_entry, self.base_source) {
            (Some(entry), _) => format!(
                "参照: 状況={} / 差枚={} / 開始G={}",
                entry.situation, entry.diff_range, entry.start_g
            ),
            (None, BaseSource::Placeholder) => {
                format!("参照データなし（暫定値 {} 円を使用）", self.base_value_yen)
            }
            (None, _) => "該当データなし（状況を調整してください）".to_string(),
        }
    }
}

pub fn format_yen(value: i64) -> String {
    let sign = if value >= 0 { "＋" } else { "" };
    format!("{sign}{value} 円")
}
