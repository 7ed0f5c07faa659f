//! Observation record entered at the machine.
//!
//! Categorical signals serialize with the labels the datasets use (Japanese),
//! and also accept the English kebab-case names on input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::reference::{LookupKey, NOT_APPLICABLE_BUCKET};

/// Machine state at the start of the observed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MachineState {
    #[default]
    #[serde(rename = "通常", alias = "normal")]
    Normal,
    #[serde(rename = "朝イチ", alias = "first-of-day")]
    FirstOfDay,
    #[serde(rename = "激走チャージ", alias = "surge-charge")]
    SurgeCharge,
    #[serde(rename = "完走後", alias = "post-clear")]
    PostClear,
    #[serde(rename = "非完走後", alias = "post-non-clear")]
    PostNonClear,
    #[serde(rename = "引継ぎ", alias = "carry-over")]
    CarryOver,
}

impl MachineState {
    pub const ALL: [MachineState; 6] = [
        MachineState::Normal,
        MachineState::FirstOfDay,
        MachineState::SurgeCharge,
        MachineState::PostClear,
        MachineState::PostNonClear,
        MachineState::CarryOver,
    ];

    /// Label used by the reference dataset's `situation` column
    pub fn label(self) -> &'static str {
        match self {
            MachineState::Normal => "通常",
            MachineState::FirstOfDay => "朝イチ",
            MachineState::SurgeCharge => "激走チャージ",
            MachineState::PostClear => "完走後",
            MachineState::PostNonClear => "非完走後",
            MachineState::CarryOver => "引継ぎ",
        }
    }
}

/// Which family of flavor text the line was shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FlavorTextCategory {
    #[default]
    #[serde(rename = "通常時", alias = "normal-time")]
    NormalTime,
    #[serde(rename = "激走", alias = "surge")]
    Surge,
}

impl FlavorTextCategory {
    pub fn label(self) -> &'static str {
        match self {
            FlavorTextCategory::NormalTime => "通常時",
            FlavorTextCategory::Surge => "激走",
        }
    }
}

/// Boat-ticket color, baseline blue plus four escalating tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketColor {
    #[default]
    #[serde(rename = "青", alias = "baseline", alias = "blue")]
    Blue,
    #[serde(rename = "黄", alias = "tier1", alias = "yellow")]
    Yellow,
    #[serde(rename = "銀", alias = "tier2", alias = "silver")]
    Silver,
    #[serde(rename = "金", alias = "tier3", alias = "gold")]
    Gold,
    #[serde(rename = "虹", alias = "tier4", alias = "rainbow")]
    Rainbow,
}

impl TicketColor {
    pub const ALL: [TicketColor; 5] = [
        TicketColor::Blue,
        TicketColor::Yellow,
        TicketColor::Silver,
        TicketColor::Gold,
        TicketColor::Rainbow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TicketColor::Blue => "青",
            TicketColor::Yellow => "黄",
            TicketColor::Silver => "銀",
            TicketColor::Gold => "金",
            TicketColor::Rainbow => "虹",
        }
    }
}

/// Label shown by the in-game race forecaster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecasterLabel {
    #[serde(rename = "本命", alias = "favorite")]
    Favorite,
    #[serde(rename = "対抗", alias = "contender")]
    Contender,
    #[serde(rename = "穴", alias = "longshot")]
    Longshot,
    #[serde(rename = "大穴", alias = "big-longshot")]
    BigLongshot,
}

impl ForecasterLabel {
    pub fn label(self) -> &'static str {
        match self {
            ForecasterLabel::Favorite => "本命",
            ForecasterLabel::Contender => "対抗",
            ForecasterLabel::Longshot => "穴",
            ForecasterLabel::BigLongshot => "大穴",
        }
    }
}

/// Character screen shown when a bonus ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndScreenIcon {
    #[serde(rename = "波多野", alias = "hatano")]
    Hatano,
    #[serde(rename = "洞口", alias = "horaguchi")]
    Horaguchi,
    #[serde(rename = "青島", alias = "aoshima")]
    Aoshima,
    #[serde(rename = "蒲生", alias = "gamou")]
    Gamou,
    #[serde(rename = "全員集合", alias = "all-cast")]
    AllCast,
}

impl EndScreenIcon {
    pub fn label(self) -> &'static str {
        match self {
            EndScreenIcon::Hatano => "波多野",
            EndScreenIcon::Horaguchi => "洞口",
            EndScreenIcon::Aoshima => "青島",
            EndScreenIcon::Gamou => "蒲生",
            EndScreenIcon::AllCast => "全員集合",
        }
    }
}

/// One observation of a machine, owned by the caller for a single evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    /// Date the machine was observed
    pub date: Option<NaiveDate>,
    pub state: MachineState,
    /// Spins elapsed since the state started
    pub spin_count: u32,
    /// Not used by the computation
    pub through_count: u32,
    pub flavor_text_category: FlavorTextCategory,
    /// Literal flavor-text line, empty when none was seen
    pub flavor_text: String,
    pub ticket_color: TicketColor,
    pub forecaster_label: Option<ForecasterLabel>,
    pub end_screen_icon: Option<EndScreenIcon>,
    pub rare_symbol_count: u32,
    pub total_spin_count: u32,
    /// Secondary lookup key, `"-"` when not applicable
    pub diff_range_bucket: String,
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            date: None,
            state: MachineState::default(),
            spin_count: 0,
            through_count: 0,
            flavor_text_category: FlavorTextCategory::default(),
            flavor_text: String::new(),
            ticket_color: TicketColor::default(),
            forecaster_label: None,
            end_screen_icon: None,
            rare_symbol_count: 0,
            total_spin_count: 0,
            diff_range_bucket: NOT_APPLICABLE_BUCKET.to_string(),
        }
    }
}

impl Observation {
    /// Observed rare-symbol rate; 0 when no spins were recorded
    pub fn rare_symbol_probability(&self) -> f64 {
        if self.total_spin_count == 0 {
            return 0.0;
        }
        f64::from(self.rare_symbol_count) / f64::from(self.total_spin_count)
    }

    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::new(self.state.label(), &self.diff_range_bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_guards_zero_denominator() {
        let obs = Observation {
            rare_symbol_count: 12,
            total_spin_count: 0,
            ..Observation::default()
        };
        assert_eq!(obs.rare_symbol_probability(), 0.0);
    }

    #[test]
    fn test_probability_ratio() {
        let obs = Observation {
            rare_symbol_count: 10,
            total_spin_count: 200,
            ..Observation::default()
        };
        assert!((obs.rare_symbol_probability() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_labels_and_aliases() {
        let state: MachineState = serde_json::from_str("\"first-of-day\"").unwrap();
        assert_eq!(state, MachineState::FirstOfDay);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"朝イチ\"");

        let color: TicketColor = serde_json::from_str("\"tier2\"").unwrap();
        assert_eq!(color, TicketColor::Silver);
        let color: TicketColor = serde_json::from_str("\"虹\"").unwrap();
        assert_eq!(color, TicketColor::Rainbow);

        let category: FlavorTextCategory = serde_json::from_str("\"surge\"").unwrap();
        assert_eq!(category.label(), "激走");
    }

    #[test]
    fn test_state_labels_round_trip_through_serde() {
        for state in MachineState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.label()));
        }
    }

    #[test]
    fn test_lookup_key_uses_state_label_and_bucket() {
        let obs = Observation {
            state: MachineState::PostClear,
            diff_range_bucket: "-1000~0".to_string(),
            ..Observation::default()
        };
        let key = obs.lookup_key();
        assert_eq!(key.situation, "完走後");
        assert_eq!(key.diff_range, "-1000~0");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let obs: Observation =
            serde_json::from_str(r#"{"state":"朝イチ","spin_count":120,"date":"2025-08-01"}"#)
                .unwrap();
        assert_eq!(obs.state, MachineState::FirstOfDay);
        assert_eq!(obs.spin_count, 120);
        assert_eq!(obs.ticket_color, TicketColor::Blue);
        assert_eq!(obs.diff_range_bucket, "-");
        assert_eq!(obs.date, NaiveDate::from_ymd_opt(2025, 8, 1));
    }
}
