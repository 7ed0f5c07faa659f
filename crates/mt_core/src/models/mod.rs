//! Data model: observations entered at the machine, reference rows and
//! flavor-text rows loaded from the datasets, and evaluation results.

pub mod observation;
pub mod reference;
pub mod result;
pub mod serifu;

pub use observation::{
    EndScreenIcon, FlavorTextCategory, ForecasterLabel, MachineState, Observation, TicketColor,
};
pub use reference::{LookupKey, ReferenceEntry, NOT_APPLICABLE_BUCKET};
pub use result::{Action, AppliedCorrection, BaseSource, CorrectionKind, EvaluationResult};
pub use serifu::SerifuEntry;
