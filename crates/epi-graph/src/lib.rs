//! `epi-graph`: the population graph the tick engine mutates and the host
//! renders.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`node`]    | `Venue`, `Agent`, the borrowed `Node` view, `NodeKey`, `Edge`     |
//! | [`graph`]   | `Graph` arena, co-location index, nearest-venue-of-kind lookup    |
//! | [`builder`] | `GraphBuilder`: houses, agents, sick seeding, layout              |
//! | [`layout`]  | `Layout` trait, `GridLayout`, `EuropeLayout`                      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                                    |
//!
//! # Arena plus derived index
//!
//! Venues and agents live in two dense `Vec`s indexed by `VenueId` and
//! `AgentId`.  Containment ("agent is at venue") is stored once, on the
//! agent, and mirrored into a per-venue occupant list that
//! [`Graph::move_agent`] keeps in sync.  The host-facing edge list is
//! derived from the agents on demand, so co-location lookups never scan it.

pub mod builder;
pub mod error;
pub mod graph;
pub mod layout;
pub mod node;

#[cfg(test)]
mod tests;

pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, MoveOutcome};
pub use layout::{EuropeLayout, GridLayout, Layout};
pub use node::{Agent, Edge, Node, NodeKey, Venue};
