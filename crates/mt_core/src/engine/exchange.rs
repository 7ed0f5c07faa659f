//! Exchange-rate value selection.
//!
//! Reference rows carry expected values at two rates: par (`exp_equal`,
//! 47 units) and alternate (`exp_56`, 56 units). A custom rate is linearly
//! interpolated between them, and extrapolated outside that range.

use serde::{Deserialize, Serialize};

use crate::config::ExchangeConfig;
use crate::models::ReferenceEntry;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", content = "units", rename_all = "lowercase")]
pub enum ExchangeRate {
    #[default]
    Par,
    Alt,
    /// Payout units per 1000 yen
    Custom(f64),
}

/// Expected value of `entry` in yen at `rate`
pub fn value_for(entry: &ReferenceEntry, rate: ExchangeRate, config: &ExchangeConfig) -> i64 {
    match rate {
        ExchangeRate::Par => entry.exp_equal,
        ExchangeRate::Alt => entry.exp_56,
        ExchangeRate::Custom(units) => interpolate(entry, units, config),
    }
}

fn interpolate(entry: &ReferenceEntry, units: f64, config: &ExchangeConfig) -> i64 {
    if units == config.alt_units {
        return entry.exp_56;
    }
    if units == config.par_units {
        return entry.exp_equal;
    }
    // t is not clamped; rates outside par..alt extrapolate
    let t = (units - config.par_units) / (config.alt_units - config.par_units);
    let par = entry.exp_equal as f64;
    let alt = entry.exp_56 as f64;
    (par + t * (alt - par)).round() as i64
}
