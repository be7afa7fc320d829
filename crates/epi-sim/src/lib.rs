//! `epi-sim`: tick engine for the household/venue epidemic simulator.
//!
//! # Two-phase tick
//!
//! ```text
//! advance_tick:
//!   ① Movement: for each living agent in AgentId order:
//!                  label = MovementModel::next_target(location class)
//!                  Stay / same class / Base-at-home → no-op
//!                  Base                             → home venue
//!                  Venue(kind)                      → nearest venue of kind
//!                  source or destination locked     → vetoed
//!   ② Health  : snapshot SICK agents; every other agent sharing a venue
//!                with k of them takes k spread draws, then one
//!                progression draw.
//!   ③ tick += 1
//! ```
//!
//! The movement phase completes before the health phase starts; nothing
//! interleaves within a tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::SimConfig;
//! use epi_graph::EuropeLayout;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .layout(EuropeLayout::default())
//!     .build()?;
//! sim.run_ticks(100, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimState, TickReport};
