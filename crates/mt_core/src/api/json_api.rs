//! JSON request/response surface for a form front-end.
//!
//! One request carries one observation and the exchange-rate choice; the
//! response carries the evaluation result with its display strings.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::SignalCatalogs;
use crate::config::EvaluatorConfig;
use crate::data::{Datasets, SerifuIndex, DATASETS};
use crate::engine::Evaluator;
use crate::input::{RawExchange, RawObservation};
use crate::models::{EvaluationResult, Observation};

pub const SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "E_UNSUPPORTED_SCHEMA";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

static DEFAULT_EVALUATOR: Lazy<Evaluator> =
    Lazy::new(|| Evaluator::new(EvaluatorConfig::from_env_or_default()));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub schema_version: u8,
    pub observation: RawObservation,
    #[serde(default)]
    pub exchange: RawExchange,
}

/// Hint notes for the signals present in the observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalHints {
    pub flavor_text: Option<String>,
    pub ticket_color: Option<String>,
    pub forecaster: Option<String>,
    pub end_screen: Option<String>,
}

impl SignalHints {
    pub fn collect(obs: &Observation, catalogs: &SignalCatalogs, serifu: SerifuIndex<'_>) -> Self {
        let flavor_text = if obs.flavor_text.is_empty() {
            None
        } else {
            serifu.hint_for(&obs.flavor_text).map(str::to_string)
        };
        Self {
            flavor_text,
            ticket_color: catalogs.ticket_color_hint(obs.ticket_color).map(str::to_string),
            forecaster: obs
                .forecaster_label
                .and_then(|l| catalogs.forecaster_hint(l))
                .map(str::to_string),
            end_screen: obs
                .end_screen_icon
                .and_then(|i| catalogs.end_screen_hint(i))
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub schema_version: u8,
    pub result: EvaluationResult,
    /// e.g. `＋3000 円`
    pub value_text: String,
    /// 続行 or ヤメ
    pub action_label: String,
    /// Which reference row was used, or why none was
    pub trace: String,
    pub hints: SignalHints,
}

/// Typed entry point
pub fn evaluate(
    request: EvaluationRequest,
    datasets: &Datasets,
    evaluator: &Evaluator,
) -> Result<EvaluationResponse, String> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("unsupported schema version: {}", request.schema_version),
        ));
    }

    let rate = request.exchange.to_rate(evaluator.config().exchange.par_units);
    let observation = request.observation.into_observation();
    let result = evaluator.evaluate(&observation, rate, &datasets.reference);
    let hints = SignalHints::collect(
        &observation,
        evaluator.catalogs(),
        SerifuIndex::new(&datasets.serifu),
    );

    Ok(EvaluationResponse {
        schema_version: SCHEMA_VERSION,
        value_text: result.value_text(),
        action_label: result.action.label().to_string(),
        trace: result.trace(),
        hints,
        result,
    })
}

/// String-in/string-out entry point
pub fn evaluate_json(
    request_json: &str,
    datasets: &Datasets,
    evaluator: &Evaluator,
) -> Result<String, String> {
    let request: EvaluationRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("invalid JSON request: {e}")))?;
    let response = evaluate(request, datasets, evaluator)?;
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

/// Evaluate against the process-wide dataset store and environment config.
///
/// Before datasets are installed this behaves as if both datasets were empty.
pub fn evaluate_json_with_store(request_json: &str) -> Result<String, String> {
    evaluate_json(request_json, DATASETS.current(), &DEFAULT_EVALUATOR)
}
