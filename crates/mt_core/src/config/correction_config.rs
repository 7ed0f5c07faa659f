use serde::{Deserialize, Serialize};

/// Correction engine settings.
///
/// Ticket-color bonuses live in the signal catalogs, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Flavor-text phrase hinting mode B or better
    pub marker_a_phrase: String,
    pub marker_a_bonus_yen: i64,
    /// Flavor-text phrase hinting a stronger mode
    pub marker_b_phrase: String,
    pub marker_b_bonus_yen: i64,
    /// Rare-symbol rate of the top setting is `1 / rare_symbol_denominator`
    pub rare_symbol_denominator: f64,
    /// Fraction of the top-setting rate the observed rate must reach
    pub rare_symbol_tolerance: f64,
    pub rare_symbol_bonus_yen: i64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            marker_a_phrase: "波多野感じ".to_string(),
            marker_a_bonus_yen: 500,
            marker_b_phrase: "百年早え".to_string(),
            marker_b_bonus_yen: 1000,
            rare_symbol_denominator: 22.53,
            rare_symbol_tolerance: 0.95,
            rare_symbol_bonus_yen: 1500,
        }
    }
}

impl CorrectionConfig {
    /// Observed rates at or above this earn the rare-symbol bonus
    pub fn rare_symbol_threshold(&self) -> f64 {
        (1.0 / self.rare_symbol_denominator) * self.rare_symbol_tolerance
    }
}
