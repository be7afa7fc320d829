//! `epi-core`: foundational types for the `epi` household/venue epidemic
//! simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `VenueId`                                  |
//! | [`kind`]        | `VenueKind` label (`"house"` or an ISO country code)  |
//! | [`geo`]         | `Point`, Euclidean distance                           |
//! | [`time`]        | `Tick`                                                |
//! | [`health`]      | `HealthState` enum                                    |
//! | [`config`]      | `SimConfig`, `BorderPolicy`, validation               |
//! | [`countries`]   | Embedded European country codes and centroids         |
//! | [`rng`]         | `SimRng` and the weighted / uniform sampling primitives |
//! | [`error`]       | `CoreError`, `ConfigError`, `CoreResult`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod countries;
pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{validate_mask_percentage, BorderPolicy, SimConfig};
pub use error::{ConfigError, CoreError, CoreResult};
pub use geo::Point;
pub use health::HealthState;
pub use ids::{AgentId, VenueId};
pub use kind::VenueKind;
pub use rng::SimRng;
pub use time::Tick;
