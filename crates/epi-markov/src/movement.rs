//! Per-tick movement decision.

use epi_core::{SimRng, VenueKind};

use crate::{Label, ModelError, ModelResult, TransitionTable};

/// Probability that an agent at a house stays put on any given tick,
/// checked before the table is consulted.
pub const HOME_STICKINESS: f64 = 0.9;

/// The active transition table plus the home stickiness rule.
///
/// Built once per run from the table the border policy selects; the tick
/// engine owns it and passes it nothing but the agent's location class.
#[derive(Clone, Debug)]
pub struct MovementModel {
    table:           TransitionTable,
    home_stickiness: f64,
}

impl MovementModel {
    /// Wrap a validated `table` with the default stickiness.
    pub fn new(table: TransitionTable) -> ModelResult<Self> {
        table.validate()?;
        Ok(Self { table, home_stickiness: HOME_STICKINESS })
    }

    /// Override the home stickiness.  `p` must lie in `[0, 1]`.
    pub fn with_home_stickiness(mut self, p: f64) -> ModelResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ModelError::InvalidProbability(p));
        }
        self.home_stickiness = p;
        Ok(self)
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Draw the next label for an agent whose current venue has class
    /// `location_class`.
    ///
    /// Houses short-circuit to [`Label::Stay`] with probability
    /// `home_stickiness`.  A class with no row in the table also yields
    /// `Stay`.
    pub fn next_target(&self, location_class: &VenueKind, rng: &mut SimRng) -> Label {
        if location_class.is_house() && rng.gen_bool(self.home_stickiness) {
            return Label::Stay;
        }
        self.table
            .row(location_class.as_str())
            .and_then(|row| rng.choose(row))
            .cloned()
            .unwrap_or(Label::Stay)
    }
}
