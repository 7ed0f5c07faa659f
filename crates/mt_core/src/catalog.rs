//! Signal catalogs
//!
//! Static tables mapping categorical machine cues to hint notes, and ticket
//! colors to their bonus. The tables are YAML data embedded at compile time
//! and parsed once on first use.
//!
//! ```rust
//! use mt_core::catalog::signal_catalogs;
//! use mt_core::models::TicketColor;
//!
//! assert_eq!(signal_catalogs().ticket_color_bonus(TicketColor::Silver), 1000);
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{EndScreenIcon, ForecasterLabel, TicketColor};

/// Catalog YAML (compile-time embedded)
pub const SIGNAL_CATALOGS_YAML: &str = include_str!("../data/signal_catalogs.yaml");

static SIGNAL_CATALOGS: OnceLock<SignalCatalogs> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketColorEntry {
    pub color: TicketColor,
    pub bonus_yen: i64,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecasterEntry {
    pub label: ForecasterLabel,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndScreenEntry {
    pub icon: EndScreenIcon,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalCatalogs {
    #[serde(default)]
    pub ticket_colors: Vec<TicketColorEntry>,
    #[serde(default)]
    pub forecaster_labels: Vec<ForecasterEntry>,
    #[serde(default)]
    pub end_screen_icons: Vec<EndScreenEntry>,
}

impl SignalCatalogs {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Bonus for a ticket color; 0 when the color is not listed
    pub fn ticket_color_bonus(&self, color: TicketColor) -> i64 {
        self.ticket_colors
            .iter()
            .find(|e| e.color == color)
            .map(|e| e.bonus_yen)
            .unwrap_or(0)
    }

    pub fn ticket_color_hint(&self, color: TicketColor) -> Option<&str> {
        self.ticket_colors
            .iter()
            .find(|e| e.color == color)
            .map(|e| e.hint.as_str())
    }

    pub fn forecaster_hint(&self, label: ForecasterLabel) -> Option<&str> {
        self.forecaster_labels
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.hint.as_str())
    }

    pub fn end_screen_hint(&self, icon: EndScreenIcon) -> Option<&str> {
        self.end_screen_icons
            .iter()
            .find(|e| e.icon == icon)
            .map(|e| e.hint.as_str())
    }
}

/// Embedded catalogs, parsed on first call and cached.
///
/// # Panics
///
/// Panics if the embedded YAML fails to parse, which a normal build never
/// produces.
pub fn signal_catalogs() -> &'static SignalCatalogs {
    SIGNAL_CATALOGS.get_or_init(|| {
        SignalCatalogs::from_yaml(SIGNAL_CATALOGS_YAML)
            .expect("Failed to parse signal_catalogs.yaml")
    })
}
