//! Correction engine.
//!
//! Additive adjustments applied to the base value, always evaluated in this
//! order:
//! 1. ticket-color bonus (signal catalog)
//! 2. flavor-text marker phrases A and B (independent, both may fire)
//! 3. rare-symbol rate at or above the top-setting threshold

use crate::catalog::SignalCatalogs;
use crate::config::CorrectionConfig;
use crate::models::{AppliedCorrection, CorrectionKind, Observation};

pub struct CorrectionEngine<'a> {
    config: &'a CorrectionConfig,
    catalogs: &'a SignalCatalogs,
}

impl<'a> CorrectionEngine<'a> {
    pub fn new(config: &'a CorrectionConfig, catalogs: &'a SignalCatalogs) -> Self {
        Self { config, catalogs }
    }

    /// Corrections that fire for `obs`, in engine order. Zero-amount
    /// corrections are omitted.
    pub fn corrections(&self, obs: &Observation) -> Vec<AppliedCorrection> {
        let mut applied = Vec::with_capacity(4);
        let mut push = |kind, amount_yen: i64| {
            if amount_yen != 0 {
                applied.push(AppliedCorrection { kind, amount_yen });
            }
        };

        push(
            CorrectionKind::TicketColor,
            self.catalogs.ticket_color_bonus(obs.ticket_color),
        );

        if contains_marker(&obs.flavor_text, &self.config.marker_a_phrase) {
            push(CorrectionKind::FlavorTextMarkerA, self.config.marker_a_bonus_yen);
        }
        if contains_marker(&obs.flavor_text, &self.config.marker_b_phrase) {
            push(CorrectionKind::FlavorTextMarkerB, self.config.marker_b_bonus_yen);
        }

        if self.rare_symbol_rate_qualifies(obs) {
            push(CorrectionKind::RareSymbolRate, self.config.rare_symbol_bonus_yen);
        }

        applied
    }

    pub fn correct(&self, base: i64, obs: &Observation) -> i64 {
        self.corrections(obs)
            .iter()
            .fold(base, |acc, c| acc.saturating_add(c.amount_yen))
    }

    fn rare_symbol_rate_qualifies(&self, obs: &Observation) -> bool {
        // total_spin_count == 0 gives probability 0, which never qualifies
        // while the threshold is positive
        obs.total_spin_count > 0
            && obs.rare_symbol_probability() >= self.config.rare_symbol_threshold()
    }
}

fn contains_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}
