pub mod json_api;

pub use json_api::{
    evaluate, evaluate_json, evaluate_json_with_store, EvaluationRequest, EvaluationResponse,
    SignalHints, SCHEMA_VERSION,
};
