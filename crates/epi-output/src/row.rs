//! Plain data row types written by output backends.

use epi_core::HealthState;

/// One agent's location and health at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    /// Display id, e.g. `house-3-1`.
    pub agent:  String,
    pub tick:   u64,
    /// Display id of the current venue, e.g. `house-7`.
    pub venue:  String,
    /// The venue's kind (`house` or a country code).
    pub kind:   String,
    pub health: HealthState,
}

/// Population counts and engine activity for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub susceptible: u64,
    pub sick:        u64,
    pub recovered:   u64,
    pub dead:        u64,
    pub moved:       u64,
    pub vetoed:      u64,
    pub infected:    u64,
}
