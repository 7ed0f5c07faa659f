//! Evaluation pipeline
//!
//! Observation + reference rows → base value → corrections → recommendation.

use crate::catalog::{signal_catalogs, SignalCatalogs};
use crate::config::EvaluatorConfig;
use crate::models::{BaseSource, EvaluationResult, Observation, ReferenceEntry};

use super::correction::CorrectionEngine;
use super::exchange::{value_for, ExchangeRate};
use super::recommend::recommend_with_threshold;
use super::resolver::{resolver_for, BaseValueResolver, Resolution};

pub struct Evaluator {
    config: EvaluatorConfig,
    catalogs: SignalCatalogs,
    resolver: Box<dyn BaseValueResolver + Send + Sync>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        let resolver = resolver_for(&config.resolver);
        Self {
            config,
            catalogs: signal_catalogs().clone(),
            resolver,
        }
    }

    /// Replace the strategy picked from `config.resolver.strategy`
    pub fn with_resolver(mut self, resolver: Box<dyn BaseValueResolver + Send + Sync>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_catalogs(mut self, catalogs: SignalCatalogs) -> Self {
        self.catalogs = catalogs;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &SignalCatalogs {
        &self.catalogs
    }

    /// Base value and its source for `obs`
    pub fn base_value<'a>(
        &self,
        obs: &Observation,
        rate: ExchangeRate,
        entries: &'a [ReferenceEntry],
    ) -> (i64, BaseSource, Option<&'a ReferenceEntry>) {
        let key = obs.lookup_key();
        match self.resolver.resolve(entries, &key, obs.spin_count) {
            Resolution::Matched(entry) => (
                value_for(entry, rate, &self.config.exchange),
                BaseSource::Matched,
                Some(entry),
            ),
            Resolution::Placeholder(value) => (value, BaseSource::Placeholder, None),
            Resolution::NoMatch => (0, BaseSource::NoMatch, None),
        }
    }

    pub fn evaluate(
        &self,
        obs: &Observation,
        rate: ExchangeRate,
        entries: &[ReferenceEntry],
    ) -> EvaluationResult {
        let (base_value_yen, base_source, matched) = self.base_value(obs, rate, entries);

        let engine = CorrectionEngine::new(&self.config.corrections, &self.catalogs);
        let corrections = engine.corrections(obs);
        let estimated_value_yen = corrections
            .iter()
            .fold(base_value_yen, |acc, c| acc.saturating_add(c.amount_yen));
        let action = recommend_with_threshold(estimated_value_yen, self.config.continue_threshold_yen);

        tracing::debug!(
            state = obs.state.label(),
            base_value_yen,
            ?base_source,
            estimated_value_yen,
            ?action,
            "evaluated observation"
        );

        EvaluationResult {
            estimated_value_yen,
            action,
            matched_entry: matched.cloned(),
            base_value_yen,
            base_source,
            corrections,
        }
    }
}
