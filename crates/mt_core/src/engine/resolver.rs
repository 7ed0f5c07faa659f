//! Base-value resolution against the reference dataset.
//!
//! Two strategies implement [`BaseValueResolver`]:
//!
//! | Strategy | Keys | Row choice | No rows |
//! |----------|------|------------|---------|
//! | [`SimpleResolver`] | situation + bucket, relaxed to situation | largest `start_g <= spin`, else smallest `start_g` | `NoMatch` |
//! | [`NearestSpinResolver`] | situation | nearest `start_g` | placeholder value |
//!
//! When several rows tie on the deciding `start_g` (or distance), the later
//! dataset row wins. Datasets are expected to keep `(situation, diff_range,
//! start_g)` unique; `data::dataset_report` lists violations.

use crate::config::{ResolverConfig, ResolverStrategy};
use crate::models::{LookupKey, ReferenceEntry};

/// Outcome of a base-value lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a ReferenceEntry),
    /// No rows exist for the state; use this value without a row
    Placeholder(i64),
    NoMatch,
}

impl<'a> Resolution<'a> {
    pub fn entry(&self) -> Option<&'a ReferenceEntry> {
        match *self {
            Resolution::Matched(entry) => Some(entry),
            _ => None,
        }
    }
}

pub trait BaseValueResolver {
    /// Pick the reference row (or fallback) for `key` at `spin_count`.
    ///
    /// Must not fail: an empty dataset resolves like a dataset without rows
    /// for the key.
    fn resolve<'a>(
        &self,
        entries: &'a [ReferenceEntry],
        key: &LookupKey,
        spin_count: u32,
    ) -> Resolution<'a>;
}

/// Exact two-key match with spin-threshold tie-break
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleResolver;

impl SimpleResolver {
    pub fn find_best_entry<'a>(
        entries: &'a [ReferenceEntry],
        key: &LookupKey,
        spin_count: u32,
    ) -> Option<&'a ReferenceEntry> {
        let mut candidates: Vec<&ReferenceEntry> = entries
            .iter()
            .filter(|e| e.situation == key.situation && e.diff_range == key.diff_range)
            .collect();
        if candidates.is_empty() {
            candidates = entries
                .iter()
                .filter(|e| e.situation == key.situation)
                .collect();
        }
        if candidates.is_empty() {
            return None;
        }

        let spin = i64::from(spin_count);
        let reached = candidates
            .iter()
            .copied()
            .filter(|e| e.start_g <= spin)
            .max_by_key(|e| e.start_g);

        reached.or_else(|| {
            candidates
                .iter()
                .copied()
                .rev()
                .min_by_key(|e| e.start_g)
        })
    }
}

impl BaseValueResolver for SimpleResolver {
    fn resolve<'a>(
        &self,
        entries: &'a [ReferenceEntry],
        key: &LookupKey,
        spin_count: u32,
    ) -> Resolution<'a> {
        match Self::find_best_entry(entries, key, spin_count) {
            Some(entry) => {
                tracing::debug!(
                    situation = %entry.situation,
                    diff_range = %entry.diff_range,
                    start_g = entry.start_g,
                    "simple resolver matched"
                );
                Resolution::Matched(entry)
            }
            None => {
                tracing::debug!(situation = %key.situation, "simple resolver found no rows");
                Resolution::NoMatch
            }
        }
    }
}

/// Situation-only match, nearest `start_g` to the spin count.
///
/// States with no rows at all resolve to a fixed placeholder value.
#[derive(Debug, Clone)]
pub struct NearestSpinResolver {
    pub first_of_day_placeholder_yen: i64,
    pub default_placeholder_yen: i64,
    pub first_of_day_marker: String,
}

impl NearestSpinResolver {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            first_of_day_placeholder_yen: config.first_of_day_placeholder_yen,
            default_placeholder_yen: config.default_placeholder_yen,
            first_of_day_marker: config.first_of_day_marker.clone(),
        }
    }

    pub fn placeholder_for(&self, situation: &str) -> i64 {
        if !self.first_of_day_marker.is_empty() && situation.contains(&self.first_of_day_marker) {
            self.first_of_day_placeholder_yen
        } else {
            self.default_placeholder_yen
        }
    }
}

impl Default for NearestSpinResolver {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl BaseValueResolver for NearestSpinResolver {
    fn resolve<'a>(
        &self,
        entries: &'a [ReferenceEntry],
        key: &LookupKey,
        spin_count: u32,
    ) -> Resolution<'a> {
        let spin = i64::from(spin_count);
        let nearest = entries
            .iter()
            .rev()
            .filter(|e| e.situation == key.situation)
            .min_by_key(|e| e.start_g.abs_diff(spin));

        match nearest {
            Some(entry) => {
                tracing::debug!(
                    situation = %entry.situation,
                    start_g = entry.start_g,
                    spin_count,
                    "nearest-spin resolver matched"
                );
                Resolution::Matched(entry)
            }
            None => {
                let value = self.placeholder_for(&key.situation);
                tracing::debug!(
                    situation = %key.situation,
                    value,
                    "nearest-spin resolver using placeholder"
                );
                Resolution::Placeholder(value)
            }
        }
    }
}

pub fn resolver_for(config: &ResolverConfig) -> Box<dyn BaseValueResolver + Send + Sync> {
    match config.strategy {
        ResolverStrategy::Simple => Box::new(SimpleResolver),
        ResolverStrategy::Extended => Box::new(NearestSpinResolver::from_config(config)),
    }
}
