use serde::{Deserialize, Serialize};

/// Exchange-rate endpoints, in medals per 1000 yen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Par ("equal") rate; `exp_equal` is valued here
    pub par_units: f64,
    /// Alternate rate; `exp_56` is valued here
    pub alt_units: f64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            par_units: 47.0,
            alt_units: 56.0,
        }
    }
}
