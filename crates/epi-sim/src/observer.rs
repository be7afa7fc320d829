//! Simulation observer trait for progress reporting and data collection.

use epi_core::Tick;
use epi_graph::Graph;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] around
/// each tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport, _graph: &Graph) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {} new infections", report.tick, report.infected);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the movement phase; `tick` is the counter going in.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick is committed.  `graph` is the post-tick state the
    /// host renders; `report.tick` is the incremented counter.
    fn on_tick_end(&mut self, _report: &TickReport, _graph: &Graph) {}

    /// Called once after the last tick of a `run_ticks` call.
    fn on_sim_end(&mut self, _final_tick: Tick, _graph: &Graph) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
