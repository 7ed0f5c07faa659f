//! Evaluation engine: base-value resolution, exchange-rate selection,
//! corrections and the continue/quit rule.

pub mod correction;
pub mod evaluator;
pub mod exchange;
pub mod recommend;
pub mod resolver;

pub use correction::CorrectionEngine;
pub use evaluator::Evaluator;
pub use exchange::{value_for, ExchangeRate};
pub use recommend::{recommend, recommend_with_threshold};
pub use resolver::{
    resolver_for, BaseValueResolver, NearestSpinResolver, Resolution, SimpleResolver,
};
