//! # mt_core - Expected-value evaluation for Monkey Turn V floor play
//!
//! Given what a player observed at a machine (state, spin counts, flavor
//! text, ticket color and other cues), estimates the expected value in yen
//! and recommends continuing or quitting.
//!
//! ## Pipeline
//! - Base value: reference-row lookup (pluggable strategy) priced at the
//!   chosen exchange rate
//! - Corrections: ticket color, flavor-text markers, rare-symbol rate
//! - Recommendation: continue when the value is strictly positive
//!
//! ```rust
//! use mt_core::engine::{Evaluator, ExchangeRate};
//! use mt_core::models::{Action, MachineState, Observation, TicketColor};
//!
//! let obs = Observation {
//!     state: MachineState::FirstOfDay,
//!     ticket_color: TicketColor::Silver,
//!     ..Observation::default()
//! };
//! let result = Evaluator::default().evaluate(&obs, ExchangeRate::Par, &[]);
//! assert_eq!(result.estimated_value_yen, 3000);
//! assert_eq!(result.action, Action::Continue);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod input;
pub mod models;

pub use api::{evaluate_json, evaluate_json_with_store, EvaluationRequest, EvaluationResponse};
pub use config::{EvaluatorConfig, ResolverStrategy};
pub use data::{Datasets, DATASETS};
pub use engine::{recommend, value_for, Evaluator, ExchangeRate};
pub use error::{CoreError, Result};
pub use models::{Action, EvaluationResult, Observation, ReferenceEntry, SerifuEntry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
