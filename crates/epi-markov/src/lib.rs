//! `epi-markov`: movement and disease Markov models.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`label`]    | `Label`: `Stay`, `Base`, or a destination `VenueKind`             |
//! | [`table`]    | `TransitionTable`, `PolicyTables` (open / partial / closed)       |
//! | [`movement`] | `MovementModel`: home stickiness + uniform pick over a table row  |
//! | [`disease`]  | `HealthTransitions`, `DiseaseModel`: spread, masks, progression   |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                                    |
//!
//! # Transition tables are multisets
//!
//! A movement row is an ordered sequence of labels and a transition is a
//! uniform pick over it: a label listed six times is six times as likely as
//! a label listed once.  Rows are never normalised into probabilities.
//! Disease rows, by contrast, are explicit `(probability, next_state)`
//! pairs consulted with a weighted draw.

pub mod disease;
pub mod error;
pub mod label;
pub mod movement;
pub mod table;

#[cfg(test)]
mod tests;

pub use disease::{DiseaseModel, HealthTransitions};
pub use error::{ModelError, ModelResult};
pub use label::Label;
pub use movement::MovementModel;
pub use table::{PolicyTables, TransitionTable};
