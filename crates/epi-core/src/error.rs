//! Core error types.
//!
//! Sub-crates define their own error enums and wrap these via `#[from]`.
//! `ConfigError` covers rejected configuration; `CoreError` covers the
//! random primitives.

use thiserror::Error;

/// A configuration record that must be rejected before any graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("houses must be at least 1")]
    NoHouses,

    #[error("agents per house must be at least 1")]
    NoAgentsPerHouse,

    #[error("{requested} initial sick agents requested but the population is only {population}")]
    TooManySick { requested: u32, population: u64 },

    #[error("border policy {0} is not one of 0 (closed), 1 (partial), 2 (open)")]
    InvalidBorderPolicy(u8),

    #[error("mask wear percentage {0} is above 100")]
    MaskPercentageOutOfRange(u8),
}

/// Errors raised by the random primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("cannot choose from an empty sequence")]
    EmptyChoice,

    #[error("weights must be finite and non-negative with a positive total")]
    InvalidWeights,
}

/// Shorthand result type for `epi-core`.
pub type CoreResult<T> = Result<T, CoreError>;
