use serde::{Deserialize, Serialize};

/// Which base-value lookup strategy evaluations use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverStrategy {
    /// Exact situation + bucket match, largest threshold not above the spin count
    Simple,
    /// Situation match, nearest threshold, placeholder when the state has no rows
    #[default]
    Extended,
}

impl ResolverStrategy {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }
}

/// Base-value resolver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub strategy: ResolverStrategy,
    /// Extended-strategy placeholder when the state is a first-of-day state
    pub first_of_day_placeholder_yen: i64,
    /// Extended-strategy placeholder for every other state
    pub default_placeholder_yen: i64,
    /// Substring of the state label that marks a first-of-day state
    pub first_of_day_marker: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strategy: ResolverStrategy::Extended,
            first_of_day_placeholder_yen: 2000,
            default_placeholder_yen: 1000,
            first_of_day_marker: "朝イチ".to_string(),
        }
    }
}
