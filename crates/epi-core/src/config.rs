//! Per-run configuration record.
//!
//! The host reads one `SimConfig` per restart.  Apart from the mask lever,
//! which may change between ticks, every field is fixed until the next
//! restart.

use std::fmt;

use crate::ConfigError;

/// Which movement transition table is active for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum BorderPolicy {
    /// Agents may only return home.
    Closed,
    /// A handful of neighbouring countries are reachable.
    Partial,
    /// Every country is reachable.
    #[default]
    Open,
}

impl BorderPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderPolicy::Closed  => "closed",
            BorderPolicy::Partial => "partial",
            BorderPolicy::Open    => "open",
        }
    }
}

impl TryFrom<u8> for BorderPolicy {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(BorderPolicy::Closed),
            1 => Ok(BorderPolicy::Partial),
            2 => Ok(BorderPolicy::Open),
            other => Err(ConfigError::InvalidBorderPolicy(other)),
        }
    }
}

impl From<BorderPolicy> for u8 {
    fn from(policy: BorderPolicy) -> u8 {
        match policy {
            BorderPolicy::Closed  => 0,
            BorderPolicy::Partial => 1,
            BorderPolicy::Open    => 2,
        }
    }
}

impl fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the host (field names are camelCase
/// on the wire) and passed to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SimConfig {
    /// Number of household venues.  Must be at least 1.
    pub houses: u32,

    /// Agents created in each household.  Must be at least 1.
    pub agents_per_house: u32,

    /// Agents seeded as sick at build time.  At most `houses * agents_per_house`.
    pub initial_sick_agents: u32,

    /// Selects the regular / partial / closed movement table.
    pub closed_borders: BorderPolicy,

    /// Share of the population wearing masks, `0..=100`.
    pub mask_wear_percentage: u8,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            houses:               48,
            agents_per_house:     9,
            initial_sick_agents:  1,
            closed_borders:       BorderPolicy::Open,
            mask_wear_percentage: 0,
            seed:                 42,
        }
    }
}

impl SimConfig {
    /// Total number of agents this configuration builds.
    #[inline]
    pub fn population(&self) -> u64 {
        self.houses as u64 * self.agents_per_house as u64
    }

    /// Reject configurations the graph builder cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.houses == 0 {
            return Err(ConfigError::NoHouses);
        }
        if self.agents_per_house == 0 {
            return Err(ConfigError::NoAgentsPerHouse);
        }
        if self.initial_sick_agents as u64 > self.population() {
            return Err(ConfigError::TooManySick {
                requested:  self.initial_sick_agents,
                population: self.population(),
            });
        }
        validate_mask_percentage(self.mask_wear_percentage)
    }
}

/// Shared by `SimConfig::validate` and the host's real-time mask lever.
pub fn validate_mask_percentage(percentage: u8) -> Result<(), ConfigError> {
    if percentage > 100 {
        return Err(ConfigError::MaskPercentageOutOfRange(percentage));
    }
    Ok(())
}
