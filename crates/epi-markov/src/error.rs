use epi_core::{HealthState, VenueKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("transition table has no rows")]
    EmptyTable,

    #[error("transition row for `{0}` has no labels")]
    EmptyRow(VenueKind),

    #[error("{state} transition distribution is invalid: {reason}")]
    InvalidDistribution {
        state:  HealthState,
        reason: &'static str,
    },

    #[error("transmission probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

pub type ModelResult<T> = Result<T, ModelError>;
