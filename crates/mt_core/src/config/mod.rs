//! # Evaluator Configuration
//!
//! All tunable constants of the evaluation pipeline in one place: resolver
//! strategy and placeholders, exchange-rate endpoints, correction phrases and
//! bonuses, and the continue threshold.
//!
//! ## Usage
//! ```rust
//! use mt_core::config::{EvaluatorConfig, ResolverStrategy};
//!
//! let config = EvaluatorConfig::default();
//! assert_eq!(config.resolver.strategy, ResolverStrategy::Extended);
//!
//! let simple = EvaluatorConfig::simple();
//! assert_eq!(simple.resolver.strategy, ResolverStrategy::Simple);
//! ```
//!
//! ## Environment Variables
//!
//! - `MT_CONFIG_PATH`: JSON file with a full or partial `EvaluatorConfig`
//! - `MT_RESOLVER_STRATEGY`: `simple` or `extended`, applied last

mod correction_config;
mod exchange_config;
mod resolver_config;

pub use correction_config::CorrectionConfig;
pub use exchange_config::ExchangeConfig;
pub use resolver_config::{ResolverConfig, ResolverStrategy};

use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::{CoreError, Result};

pub const CONFIG_PATH_ENV: &str = "MT_CONFIG_PATH";
pub const RESOLVER_STRATEGY_ENV: &str = "MT_RESOLVER_STRATEGY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub resolver: ResolverConfig,
    pub exchange: ExchangeConfig,
    pub corrections: CorrectionConfig,
    /// Values strictly above this recommend continuing
    pub continue_threshold_yen: i64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            exchange: ExchangeConfig::default(),
            corrections: CorrectionConfig::default(),
            continue_threshold_yen: 0,
        }
    }
}

impl EvaluatorConfig {
    /// Nearest-spin lookup with placeholder fallback (default)
    pub fn extended() -> Self {
        Self::default()
    }

    /// Exact-key lookup; unmatched observations start from 0
    pub fn simple() -> Self {
        let mut cfg = Self::default();
        cfg.resolver.strategy = ResolverStrategy::Simple;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let ex = &self.exchange;
        if !ex.par_units.is_finite() || !ex.alt_units.is_finite() {
            return Err(CoreError::InvalidConfig(
                "exchange units must be finite".to_string(),
            ));
        }
        if ex.par_units == ex.alt_units {
            return Err(CoreError::InvalidConfig(format!(
                "par_units and alt_units must differ, both are {}",
                ex.par_units
            )));
        }
        let denominator = self.corrections.rare_symbol_denominator;
        if !(denominator.is_finite() && denominator > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "rare_symbol_denominator must be positive, got {denominator}"
            )));
        }
        Ok(())
    }

    /// Build from `MT_CONFIG_PATH` and `MT_RESOLVER_STRATEGY`
    pub fn from_env() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).ok();
        let strategy = env::var(RESOLVER_STRATEGY_ENV).ok();
        Self::from_sources(path.as_deref(), strategy.as_deref())
    }

    /// Like [`EvaluatorConfig::from_env`], falling back to defaults on error
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!("ignoring evaluator config from environment: {e}");
            Self::default()
        })
    }

    fn from_sources(path: Option<&str>, strategy: Option<&str>) -> Result<Self> {
        let mut cfg = match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    CoreError::InvalidConfig(format!(
                        "failed to read {CONFIG_PATH_ENV}='{path}': {e}"
                    ))
                })?;
                Self::from_json(&content)?
            }
            None => Self::default(),
        };

        if let Some(name) = strategy.map(str::trim).filter(|s| !s.is_empty()) {
            cfg.resolver.strategy = ResolverStrategy::parse(name).ok_or_else(|| {
                CoreError::InvalidConfig(format!("unknown {RESOLVER_STRATEGY_ENV}='{name}'"))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let cfg = EvaluatorConfig::default();
        assert_eq!(cfg.resolver.first_of_day_placeholder_yen, 2000);
        assert_eq!(cfg.resolver.default_placeholder_yen, 1000);
        assert_eq!(cfg.exchange.par_units, 47.0);
        assert_eq!(cfg.exchange.alt_units, 56.0);
        assert_eq!(cfg.corrections.rare_symbol_bonus_yen, 1500);
        assert_eq!(cfg.continue_threshold_yen, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rare_symbol_threshold() {
        let cfg = CorrectionConfig::default();
        let expected = (1.0 / 22.53) * 0.95;
        assert!((cfg.rare_symbol_threshold() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = EvaluatorConfig::from_json(r#"{"resolver":{"strategy":"simple"}}"#).unwrap();
        assert_eq!(cfg.resolver.strategy, ResolverStrategy::Simple);
        assert_eq!(cfg.resolver.default_placeholder_yen, 1000);
        assert_eq!(cfg.corrections.marker_b_phrase, "百年早え");
    }

    #[test]
    fn test_validate_rejects_equal_units() {
        let mut cfg = EvaluatorConfig::default();
        cfg.exchange.alt_units = 47.0;
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_denominator() {
        let mut cfg = EvaluatorConfig::default();
        cfg.corrections.rare_symbol_denominator = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_sources_strategy_override() {
        let cfg = EvaluatorConfig::from_sources(None, Some(" Simple ")).unwrap();
        assert_eq!(cfg.resolver.strategy, ResolverStrategy::Simple);

        assert!(EvaluatorConfig::from_sources(None, Some("fuzzy")).is_err());
        assert_eq!(
            EvaluatorConfig::from_sources(Some(""), Some("")).unwrap(),
            EvaluatorConfig::default()
        );
    }

    #[test]
    fn test_sources_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"continue_threshold_yen": 300, "exchange": {"alt_units": 60}}"#)
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cfg = EvaluatorConfig::from_sources(Some(&path), None).unwrap();
        assert_eq!(cfg.continue_threshold_yen, 300);
        assert_eq!(cfg.exchange.alt_units, 60.0);
        assert_eq!(cfg.exchange.par_units, 47.0);

        let err = EvaluatorConfig::from_sources(Some("/nonexistent/mt.json"), None);
        assert!(err.is_err());
    }

    #[test]
    fn test_config_serialization() {
        let cfg = EvaluatorConfig::simple();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = EvaluatorConfig::from_json(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}
