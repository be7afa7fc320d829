//! Aggregate health counts.

use std::fmt;

use epi_core::HealthState;
use epi_graph::{Agent, Graph};

/// The population split by health state at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthCounts {
    pub population:  u64,
    pub susceptible: u64,
    pub sick:        u64,
    pub recovered:   u64,
    pub dead:        u64,
}

impl HealthCounts {
    /// Count every agent node in `graph`.
    pub fn tally(graph: &Graph) -> Self {
        Self::from_agents(graph.agents())
    }

    pub fn from_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut counts = Self::default();
        for agent in agents {
            counts.add(agent.health);
        }
        counts
    }

    pub fn add(&mut self, health: HealthState) {
        self.population += 1;
        match health {
            HealthState::Susceptible => self.susceptible += 1,
            HealthState::Sick        => self.sick += 1,
            HealthState::Recovered   => self.recovered += 1,
            HealthState::Dead        => self.dead += 1,
        }
    }

    pub fn get(&self, health: HealthState) -> u64 {
        match health {
            HealthState::Susceptible => self.susceptible,
            HealthState::Sick        => self.sick,
            HealthState::Recovered   => self.recovered,
            HealthState::Dead        => self.dead,
        }
    }

    pub fn alive(&self) -> u64 {
        self.population - self.dead
    }
}

impl fmt::Display for HealthCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "population {}: {} susceptible, {} sick, {} recovered, {} dead",
            self.population, self.susceptible, self.sick, self.recovered, self.dead,
        )
    }
}
