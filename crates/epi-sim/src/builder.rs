//! Fluent builder for constructing a [`Sim`].

use epi_core::{SimConfig, Tick};
use epi_graph::{GridLayout, Layout};
use epi_markov::{DiseaseModel, PolicyTables};

use crate::sim::{assemble, Assembled};
use crate::{Sim, SimResult, SimState};

/// Fluent builder for [`Sim<L>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                    |
/// |-----------------|--------------------------------------------|
/// | `.layout(l)`    | `GridLayout::default()`                    |
/// | `.tables(t)`    | `PolicyTables::europe()`                   |
/// | `.disease(d)`   | `DiseaseModel::baseline()` (0.3, SIR)      |
///
/// The stock tables send agents to country kinds, which only
/// [`EuropeLayout`][epi_graph::EuropeLayout] assigns.  Under the default
/// grid every venue stays a `house`, so open or partial borders never move
/// anyone; pair the two, or supply tables over `house`.
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .layout(EuropeLayout::default())
///     .build()?;
/// sim.run_ticks(50, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<L: Layout + Clone = GridLayout> {
    config:  SimConfig,
    layout:  L,
    tables:  PolicyTables,
    disease: DiseaseModel,
}

impl SimBuilder<GridLayout> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            layout:  GridLayout::default(),
            tables:  PolicyTables::europe(),
            disease: DiseaseModel::baseline(),
        }
    }
}

impl<L: Layout + Clone> SimBuilder<L> {
    /// Replace the layout collaborator.  It is kept for restarts.
    pub fn layout<M: Layout + Clone>(self, layout: M) -> SimBuilder<M> {
        SimBuilder {
            config:  self.config,
            layout,
            tables:  self.tables,
            disease: self.disease,
        }
    }

    /// Supply the open / partial / closed movement tables.
    pub fn tables(mut self, tables: PolicyTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn disease(mut self, disease: DiseaseModel) -> Self {
        self.disease = disease;
        self
    }

    /// Validate the config, build the graph, and resolve the movement table
    /// for the configured border policy.
    pub fn build(self) -> SimResult<Sim<L>> {
        let Assembled { graph, movement, rng } = assemble(&self.config, &self.tables, &self.layout)?;
        log::info!(
            "sim ready: {} venues, {} agents, borders {}, masks {}%",
            graph.venue_count(),
            graph.agent_count(),
            self.config.closed_borders,
            self.config.mask_wear_percentage,
        );
        let sim = Sim {
            state:    SimState { tick: Tick::ZERO, config: self.config },
            graph,
            tables:   self.tables,
            movement,
            disease:  self.disease,
            layout:   self.layout,
            rng,
        };
        let missing = sim.unreachable_destinations();
        if !missing.is_empty() {
            log::warn!(
                "{} of the active table's destinations have no venue; those draws will not move anyone",
                missing.len(),
            );
        }
        Ok(sim)
    }
}
