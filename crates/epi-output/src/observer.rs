//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use epi_core::Tick;
use epi_graph::Graph;
use epi_sim::{SimObserver, TickReport};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{HealthCounts, OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every tick and agent
/// snapshots every `snapshot_interval` ticks to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run_ticks` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    /// `0` disables snapshots.
    snapshot_interval: u64,
    history:           Vec<HealthCounts>,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snapshot_interval: 0,
            history:           Vec::new(),
            last_error:        None,
        }
    }

    /// Write agent snapshots at every tick that is a multiple of `interval`.
    pub fn snapshot_every(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Record the freshly built graph as tick 0.
    pub fn record_initial(&mut self, graph: &Graph) {
        let report = TickReport::default();
        self.record(&report, graph);
    }

    /// Counts recorded so far, one per summary row.
    pub fn history(&self) -> &[HealthCounts] {
        &self.history
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, report: &TickReport, graph: &Graph) {
        let counts = HealthCounts::tally(graph);
        self.history.push(counts);

        let row = TickSummaryRow {
            tick:        report.tick.0,
            susceptible: counts.susceptible,
            sick:        counts.sick,
            recovered:   counts.recovered,
            dead:        counts.dead,
            moved:       report.moved as u64,
            vetoed:      report.vetoed as u64,
            infected:    report.infected as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        if self.snapshot_interval > 0 && report.tick.0.is_multiple_of(self.snapshot_interval) {
            let rows = snapshot_rows(report.tick, graph);
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn snapshot_rows(tick: Tick, graph: &Graph) -> Vec<AgentSnapshotRow> {
    graph
        .agents()
        .iter()
        .filter_map(|agent| {
            let venue = graph.venue(agent.location)?;
            Some(AgentSnapshotRow {
                agent:  graph.agent_label(agent.id)?,
                tick:   tick.0,
                venue:  venue.label(),
                kind:   venue.kind.to_string(),
                health: agent.health,
            })
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, graph: &Graph) {
        self.record(report, graph);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _graph: &Graph) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
