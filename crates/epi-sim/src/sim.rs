//! The `Sim` struct and its tick loop.

use epi_core::{validate_mask_percentage, HealthState, SimConfig, SimRng, Tick, VenueId, VenueKind};
use epi_graph::{Agent, Graph, GraphBuilder, GridLayout, Layout, MoveOutcome, NodeKey};
use epi_markov::{DiseaseModel, Label, MovementModel, PolicyTables};

use crate::{SimObserver, SimResult};

// ── SimState ──────────────────────────────────────────────────────────────────

/// Counters and configuration threaded through ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimState {
    /// Completed ticks since the last (re)start.
    pub tick:   Tick,
    pub config: SimConfig,
}

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one call to [`Sim::advance_tick`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick counter after the step.
    pub tick:     Tick,
    /// Agents that changed venue.
    pub moved:    usize,
    /// Moves blocked by a quarantined source or destination.
    pub vetoed:   usize,
    /// Susceptible agents that fell sick.
    pub infected: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner: owns the graph, the active models, and the RNG.
///
/// The movement table is resolved from the border policy once per
/// (re)start and carried here; nothing about it is global.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<L: Layout + Clone = GridLayout> {
    pub(crate) state:    SimState,
    pub(crate) graph:    Graph,
    pub(crate) tables:   PolicyTables,
    pub(crate) movement: MovementModel,
    pub(crate) disease:  DiseaseModel,
    pub(crate) layout:   L,
    pub(crate) rng:      SimRng,
}

/// Everything a (re)start derives from a config.
pub(crate) struct Assembled {
    pub graph:    Graph,
    pub movement: MovementModel,
    pub rng:      SimRng,
}

/// Validate `config`, build the graph, and resolve the movement table.
pub(crate) fn assemble<L: Layout + Clone>(
    config: &SimConfig,
    tables: &PolicyTables,
    layout: &L,
) -> SimResult<Assembled> {
    config.validate()?;
    let movement = MovementModel::new(tables.select(config.closed_borders)?.clone())?;
    let mut rng = SimRng::new(config.seed);
    let graph = GraphBuilder::new(config).layout(layout.clone()).build(&mut rng)?;
    Ok(Assembled { graph, movement, rng })
}

impl<L: Layout + Clone> Sim<L> {
    // ── Read access ───────────────────────────────────────────────────────

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn tick(&self) -> Tick {
        self.state.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.state.config
    }

    /// The node/edge graph the host renders.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn movement(&self) -> &MovementModel {
        &self.movement
    }

    pub fn disease(&self) -> &DiseaseModel {
        &self.disease
    }

    /// Destination kinds in the active table that no venue carries, sorted.
    /// Draws of these labels are always no-ops.
    pub fn unreachable_destinations(&self) -> Vec<VenueKind> {
        let mut missing: Vec<VenueKind> = self
            .movement
            .table()
            .destinations()
            .filter(|kind| !self.graph.has_kind(kind.as_str()))
            .cloned()
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    // ── Host levers ───────────────────────────────────────────────────────

    /// Flip quarantine on a venue; agents are ignored.  Returns the venue's
    /// new `locked` flag.
    pub fn toggle_lock(&mut self, node: NodeKey) -> Option<bool> {
        let locked = self.graph.toggle_lock(node);
        if let Some(locked) = locked {
            log::debug!("{node:?} locked={locked}");
        }
        locked
    }

    /// Change mask wear between ticks.  Takes effect on the next health phase.
    pub fn set_mask_wear_percentage(&mut self, percentage: u8) -> SimResult<()> {
        validate_mask_percentage(percentage)?;
        self.state.config.mask_wear_percentage = percentage;
        Ok(())
    }

    /// Discard the graph and rebuild from `config`, resetting the tick to 0.
    ///
    /// On error the running simulation is left exactly as it was.
    pub fn restart(&mut self, config: SimConfig) -> SimResult<()> {
        let Assembled { graph, movement, rng } = assemble(&config, &self.tables, &self.layout)?;
        log::info!(
            "restart: {} houses x {} agents, borders {}, seed {}",
            config.houses,
            config.agents_per_house,
            config.closed_borders,
            config.seed,
        );
        self.graph = graph;
        self.movement = movement;
        self.rng = rng;
        self.state = SimState { tick: Tick::ZERO, config };
        Ok(())
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run exactly `n` ticks, calling observer hooks around each one.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.state.tick);
            let report = self.advance_tick()?;
            observer.on_tick_end(&report, &self.graph);
        }
        observer.on_sim_end(self.state.tick, &self.graph);
        Ok(())
    }

    /// One state-machine step: movement phase, then health phase, then
    /// `tick += 1`.
    pub fn advance_tick(&mut self) -> SimResult<TickReport> {
        let mut report = TickReport::default();

        // ── Phase 1: movement ─────────────────────────────────────────────
        for i in 0..self.graph.agent_count() {
            let agent = self.graph.agents()[i].clone();
            if agent.health.is_dead() {
                continue;
            }
            let Some(destination) = plan_move(&self.graph, &self.movement, &mut self.rng, &agent)
            else {
                continue;
            };
            match self.graph.move_agent(agent.id, destination)? {
                MoveOutcome::Moved => report.moved += 1,
                MoveOutcome::Locked => {
                    log::trace!("{} -> {destination} vetoed by quarantine", agent.id);
                    report.vetoed += 1;
                }
                MoveOutcome::Unchanged => {}
            }
        }

        // ── Phase 2: health ───────────────────────────────────────────────
        report.infected = self.apply_health_transitions()?;

        // ── Phase 3: commit ───────────────────────────────────────────────
        self.state.tick = self.state.tick.next();
        report.tick = self.state.tick;

        log::debug!(
            "{}: moved={} vetoed={} infected={}",
            report.tick,
            report.moved,
            report.vetoed,
            report.infected,
        );
        Ok(report)
    }

    /// Spread and progression over the post-movement co-location index.
    ///
    /// Sick agents are snapshotted first, so an agent infected this tick
    /// does not infect others until the next one.  Each sick fellow is one
    /// spread draw; progression is drawn once per tick for any agent with at
    /// least one sick fellow.  Returns the number of new infections.
    fn apply_health_transitions(&mut self) -> SimResult<usize> {
        let was_sick: Vec<bool> = self
            .graph
            .agents()
            .iter()
            .map(|a| a.health == HealthState::Sick)
            .collect();

        let mut sick_at = vec![0u32; self.graph.venue_count()];
        for agent in self.graph.agents().iter().filter(|a| was_sick[a.id.index()]) {
            sick_at[agent.location.index()] += 1;
        }

        let mask = self.state.config.mask_wear_percentage;
        let mut infected = 0;
        for i in 0..self.graph.agent_count() {
            let (id, before, location) = {
                let a = &self.graph.agents()[i];
                (a.id, a.health, a.location)
            };
            if before.is_dead() {
                continue;
            }
            let fellows = sick_at[location.index()] - u32::from(was_sick[i]);
            if fellows == 0 {
                continue;
            }

            let mut health = before;
            for _ in 0..fellows {
                if health != HealthState::Susceptible {
                    break;
                }
                health = self.disease.spread(health, mask, &mut self.rng);
            }
            if before == HealthState::Susceptible && health == HealthState::Sick {
                infected += 1;
            }
            health = self.disease.progress(health, &mut self.rng);

            if health != before {
                self.graph.set_health(id, health)?;
            }
        }
        Ok(infected)
    }
}

// ── Movement helpers ──────────────────────────────────────────────────────────

/// Resolve where `agent` wants to go this tick, or `None` for a no-op.
fn plan_move(
    graph:    &Graph,
    movement: &MovementModel,
    rng:      &mut SimRng,
    agent:    &Agent,
) -> Option<VenueId> {
    let here = graph.venue(agent.location)?;
    match movement.next_target(&here.class, rng) {
        Label::Stay => None,
        Label::Base if agent.is_home() => None,
        Label::Base => Some(agent.home),
        Label::Venue(kind) if kind == here.class || kind == here.kind => None,
        Label::Venue(kind) => {
            let found = graph.nearest_of_kind(kind.as_str(), here.position);
            if found.is_none() {
                log::trace!("{}: no venue of kind {kind}", agent.id);
            }
            found
        }
    }
}
