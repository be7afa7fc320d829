//! `epi-output`: host-side statistics and output writers.
//!
//! The engine exposes raw node state only; everything here is derived by
//! filtering nodes, the way a rendering host would.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`counts`]   | `HealthCounts`: population split by health state         |
//! | [`row`]      | `TickSummaryRow`, `AgentSnapshotRow`                     |
//! | [`writer`]   | `OutputWriter` trait                                     |
//! | [`csv`]      | `CsvWriter` → `tick_summaries.csv`, `agent_snapshots.csv` |
//! | [`observer`] | `SimOutputObserver`: drives a writer from `SimObserver`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer).snapshot_every(10);
//! obs.record_initial(sim.graph());
//! sim.run_ticks(100, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod counts;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use counts::HealthCounts;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
