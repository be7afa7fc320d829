//! Disease model: contact spread, mask suppression, and natural-history
//! progression.
//!
//! Two draws can touch an agent on a tick:
//!
//! 1. **Spread**: once per sick fellow at the same venue.  Only a
//!    susceptible agent can change; it falls sick with the transmission
//!    probability, reduced by masks.
//! 2. **Progression**: the baseline SIR clock (`Sick → Sick 0.995,
//!    Recovered 0.004, Dead 0.001`; every other state absorbing).
//!
//! Mask suppression scales whatever the transmission probability is, so a
//! model configured with a non-default rate still responds to masks.

use epi_core::{HealthState, SimRng};

use crate::{ModelError, ModelResult};

/// Default susceptible → sick probability per sick contact.
pub const BASELINE_TRANSMISSION: f64 = 0.3;

/// Masks scale transmission by `1 - pct / MASK_DIVISOR`; at 100 % wear this
/// leaves 3/103 of the baseline, a ~97 % filter efficiency.
pub const MASK_DIVISOR: f64 = 103.0;

const SUM_TOLERANCE: f64 = 1e-9;

/// Per-state `(probability, next_state)` rows, one row for each
/// [`HealthState`].
#[derive(Clone, Debug, PartialEq)]
pub struct HealthTransitions {
    rows: [Vec<(f64, HealthState)>; 4],
}

impl HealthTransitions {
    /// Every state maps to itself with probability 1.
    pub fn identity() -> Self {
        Self { rows: HealthState::ALL.map(|s| vec![(1.0, s)]) }
    }

    /// The baseline SIR progression.
    pub fn baseline() -> Self {
        Self::identity()
            .with_row(
                HealthState::Sick,
                vec![
                    (0.995, HealthState::Sick),
                    (0.004, HealthState::Recovered),
                    (0.001, HealthState::Dead),
                ],
            )
    }

    /// Replace the row for `state`.
    pub fn with_row(mut self, state: HealthState, row: Vec<(f64, HealthState)>) -> Self {
        self.rows[state_index(state)] = row;
        self
    }

    pub fn row(&self, state: HealthState) -> &[(f64, HealthState)] {
        &self.rows[state_index(state)]
    }

    /// Each row must be non-empty, non-negative, and sum to 1.  `Dead` must
    /// stay dead.
    pub fn validate(&self) -> ModelResult<()> {
        for state in HealthState::ALL {
            let row = self.row(state);
            let invalid = |reason| ModelError::InvalidDistribution { state, reason };
            if row.is_empty() {
                return Err(invalid("row is empty"));
            }
            if row.iter().any(|(p, _)| !p.is_finite() || *p < 0.0) {
                return Err(invalid("probabilities must be finite and non-negative"));
            }
            let total: f64 = row.iter().map(|(p, _)| p).sum();
            if (total - 1.0).abs() > SUM_TOLERANCE {
                return Err(invalid("probabilities must sum to 1"));
            }
        }
        if self.row(HealthState::Dead).iter().any(|&(p, s)| p > 0.0 && s != HealthState::Dead) {
            return Err(ModelError::InvalidDistribution {
                state:  HealthState::Dead,
                reason: "dead must be absorbing",
            });
        }
        Ok(())
    }

    /// Weighted draw of the next state.  Rows are validated on construction
    /// of the owning [`DiseaseModel`]; an unusable row leaves `state` as is.
    pub fn draw(&self, state: HealthState, rng: &mut SimRng) -> HealthState {
        rng.weighted_choice(self.row(state)).copied().unwrap_or(state)
    }
}

fn state_index(state: HealthState) -> usize {
    match state {
        HealthState::Susceptible => 0,
        HealthState::Sick        => 1,
        HealthState::Recovered   => 2,
        HealthState::Dead        => 3,
    }
}

/// The full disease model the health phase consults.
#[derive(Clone, Debug, PartialEq)]
pub struct DiseaseModel {
    transmission: f64,
    progression:  HealthTransitions,
}

impl DiseaseModel {
    pub fn new(transmission: f64, progression: HealthTransitions) -> ModelResult<Self> {
        if !(0.0..=1.0).contains(&transmission) {
            return Err(ModelError::InvalidProbability(transmission));
        }
        progression.validate()?;
        Ok(Self { transmission, progression })
    }

    /// 0.3 transmission with the baseline SIR progression.
    pub fn baseline() -> Self {
        Self { transmission: BASELINE_TRANSMISSION, progression: HealthTransitions::baseline() }
    }

    pub fn transmission(&self) -> f64 {
        self.transmission
    }

    pub fn progression(&self) -> &HealthTransitions {
        &self.progression
    }

    /// Transmission probability after mask suppression.  Percentages above
    /// 100 are treated as 100.
    pub fn effective_transmission(&self, mask_wear_percentage: u8) -> f64 {
        let pct = mask_wear_percentage.min(100) as f64;
        self.transmission * (1.0 - pct / MASK_DIVISOR)
    }

    /// The spread transition as an explicit distribution, for hosts that
    /// want to display it.  Non-susceptible states map to themselves.
    pub fn spread_row(&self, state: HealthState, mask_wear_percentage: u8) -> Vec<(f64, HealthState)> {
        match state {
            HealthState::Susceptible => {
                let p = self.effective_transmission(mask_wear_percentage);
                vec![(p, HealthState::Sick), (1.0 - p, HealthState::Susceptible)]
            }
            other => vec![(1.0, other)],
        }
    }

    /// One exposure to a sick fellow.
    pub fn spread(&self, state: HealthState, mask_wear_percentage: u8, rng: &mut SimRng) -> HealthState {
        match state {
            HealthState::Susceptible
                if rng.gen_bool(self.effective_transmission(mask_wear_percentage)) =>
            {
                HealthState::Sick
            }
            other => other,
        }
    }

    /// One step of the natural-history clock.
    pub fn progress(&self, state: HealthState, rng: &mut SimRng) -> HealthState {
        self.progression.draw(state, rng)
    }
}

impl Default for DiseaseModel {
    fn default() -> Self {
        Self::baseline()
    }
}
