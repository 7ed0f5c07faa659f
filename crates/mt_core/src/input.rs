//! Input boundary: permissive coercion of form values.
//!
//! Numeric fields arrive as whatever the form produced (numbers, numeric
//! strings, empty strings, garbage). Anything that is not a usable number
//! becomes 0 here, so the engine only ever sees valid numeric types.
//! Field names also accept the labels of the original observation sheet
//! (状態, G数, 舟券色, ...).

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::engine::ExchangeRate;
use crate::models::{
    EndScreenIcon, FlavorTextCategory, ForecasterLabel, MachineState, Observation, TicketColor,
    NOT_APPLICABLE_BUCKET,
};

/// Non-negative count; truncates fractions, everything unusable is 0
pub fn coerce_count(value: &Value) -> u32 {
    match number_of(value) {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// Custom payout units; unset (0, empty, garbage) falls back to `par_units`
pub fn coerce_units(value: &Value, par_units: f64) -> f64 {
    match number_of(value) {
        Some(n) if n.is_finite() && n != 0.0 => n,
        _ => par_units,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => serde_json::from_value(v)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Observation as submitted by the form, before coercion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    #[serde(alias = "日付")]
    pub date: Option<String>,
    #[serde(alias = "状態")]
    pub state: MachineState,
    #[serde(alias = "G数")]
    pub spin_count: Value,
    #[serde(alias = "スルー回数")]
    pub through_count: Value,
    #[serde(alias = "セリフ種別")]
    pub flavor_text_category: FlavorTextCategory,
    #[serde(alias = "セリフ内容")]
    pub flavor_text: String,
    #[serde(alias = "舟券色")]
    pub ticket_color: TicketColor,
    #[serde(deserialize_with = "blank_as_none")]
    pub forecaster_label: Option<ForecasterLabel>,
    #[serde(deserialize_with = "blank_as_none")]
    pub end_screen_icon: Option<EndScreenIcon>,
    #[serde(alias = "5枚役回数")]
    pub rare_symbol_count: Value,
    #[serde(alias = "総回転数")]
    pub total_spin_count: Value,
    #[serde(alias = "差枚範囲")]
    pub diff_range_bucket: Option<String>,
}

impl RawObservation {
    pub fn into_observation(self) -> Observation {
        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        let diff_range_bucket = self
            .diff_range_bucket
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| NOT_APPLICABLE_BUCKET.to_string());

        Observation {
            date,
            state: self.state,
            spin_count: coerce_count(&self.spin_count),
            through_count: coerce_count(&self.through_count),
            flavor_text_category: self.flavor_text_category,
            flavor_text: self.flavor_text,
            ticket_color: self.ticket_color,
            forecaster_label: self.forecaster_label,
            end_screen_icon: self.end_screen_icon,
            rare_symbol_count: coerce_count(&self.rare_symbol_count),
            total_spin_count: coerce_count(&self.total_spin_count),
            diff_range_bucket,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeMode {
    #[default]
    #[serde(alias = "等価")]
    Par,
    #[serde(alias = "56枚")]
    Alt,
    #[serde(alias = "カスタム")]
    Custom,
}

/// Exchange-rate selection as submitted by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawExchange {
    pub mode: ExchangeMode,
    pub units: Value,
}

impl RawExchange {
    pub fn to_rate(&self, par_units: f64) -> ExchangeRate {
        match self.mode {
            ExchangeMode::Par => ExchangeRate::Par,
            ExchangeMode::Alt => ExchangeRate::Alt,
            ExchangeMode::Custom => ExchangeRate::Custom(coerce_units(&self.units, par_units)),
        }
    }
}
