//! Fluent builder for the initial population [`Graph`].

use epi_core::{AgentId, HealthState, SimConfig, SimRng, VenueId, VenueKind};

use crate::{Agent, Graph, GraphResult, GridLayout, Layout, Venue};

/// Builds houses, their agents, the initially sick, and the layout in one
/// step.
///
/// # Build order
///
/// 1. Validate the config (fails before anything is allocated).
/// 2. `houses` venues of class `house`, ids `0..houses`.
/// 3. `agents_per_house` agents per house, each at home, `Susceptible`.
/// 4. `initial_sick_agents` distinct agents drawn without replacement become
///    `Sick`.
/// 5. The layout positions (and possibly relabels) the venues.
///
/// ```rust,ignore
/// let mut rng = SimRng::new(config.seed);
/// let graph = GraphBuilder::new(&config)
///     .layout(EuropeLayout::default())
///     .build(&mut rng)?;
/// ```
pub struct GraphBuilder<L: Layout = GridLayout> {
    config: SimConfig,
    layout: L,
}

impl GraphBuilder<GridLayout> {
    pub fn new(config: &SimConfig) -> Self {
        Self { config: config.clone(), layout: GridLayout::default() }
    }
}

impl<L: Layout> GraphBuilder<L> {
    /// Replace the layout collaborator.
    pub fn layout<M: Layout>(self, layout: M) -> GraphBuilder<M> {
        GraphBuilder { config: self.config, layout }
    }

    pub fn build(self, rng: &mut SimRng) -> GraphResult<Graph> {
        self.config.validate()?;

        let houses = self.config.houses as usize;
        let per_house = self.config.agents_per_house;

        let mut venues: Vec<Venue> = (0..houses)
            .map(|h| Venue::new(VenueId(h as u32), VenueKind::house()))
            .collect();

        let mut agents = Vec::with_capacity(houses * per_house as usize);
        for venue in &venues {
            for slot in 0..per_house {
                agents.push(Agent {
                    id:       AgentId(agents.len() as u32),
                    home:     venue.id,
                    location: venue.id,
                    health:   HealthState::Susceptible,
                    slot,
                });
            }
        }

        let ids: Vec<AgentId> = agents.iter().map(|a| a.id).collect();
        let sick = rng.sample_without_replacement(&ids, self.config.initial_sick_agents as usize);
        for id in &sick {
            agents[id.index()].health = HealthState::Sick;
        }

        self.layout.apply(&mut venues, rng);

        let graph = Graph::from_parts(venues, agents)?;
        log::info!(
            "built graph: {} venues, {} agents, {} sick",
            graph.venue_count(),
            graph.agent_count(),
            sick.len(),
        );
        Ok(graph)
    }
}
