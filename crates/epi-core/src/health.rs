//! Agent health state shared by the disease model, the graph and the output
//! writers.

/// Where an agent is in the susceptible → sick → recovered/dead progression.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Sick,
    Recovered,
    /// Terminal: a dead agent never moves or changes state again.
    Dead,
}

impl HealthState {
    /// All states in declaration order.
    pub const ALL: [HealthState; 4] = [
        HealthState::Susceptible,
        HealthState::Sick,
        HealthState::Recovered,
        HealthState::Dead,
    ];

    /// `true` for states the disease model never leaves.
    #[inline]
    pub fn is_absorbing(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, HealthState::Dead)
    }

    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Sick        => "sick",
            HealthState::Recovered   => "recovered",
            HealthState::Dead        => "dead",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
