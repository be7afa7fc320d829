use epi_core::{AgentId, ConfigError, VenueId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("venue {0} not found")]
    VenueNotFound(VenueId),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

pub type GraphResult<T> = Result<T, GraphError>;
