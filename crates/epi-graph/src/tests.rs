//! Unit tests for epi-graph.

use epi_core::{AgentId, ConfigError, HealthState, Point, SimConfig, SimRng, VenueId, VenueKind};

use crate::{
    Agent, EuropeLayout, GraphBuilder, GraphError, Graph, GridLayout, Layout, MoveOutcome, Node,
    NodeKey, Venue,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(houses: u32, agents_per_house: u32, sick: u32) -> SimConfig {
    SimConfig {
        houses,
        agents_per_house,
        initial_sick_agents: sick,
        ..SimConfig::default()
    }
}

fn venue_at(id: u32, kind: &str, x: f32, y: f32) -> Venue {
    let mut v = Venue::new(VenueId(id), VenueKind::house());
    v.kind = VenueKind::from(kind);
    v.position = Point::new(x, y);
    v
}

fn agent_at(id: u32, home: u32) -> Agent {
    Agent {
        id:       AgentId(id),
        home:     VenueId(home),
        location: VenueId(home),
        health:   HealthState::Susceptible,
        slot:     0,
    }
}

/// Three venues on a line: house at 0, NL at 10, NL at 20.
fn line_graph() -> Graph {
    let venues = vec![
        venue_at(0, "house", 0.0, 0.0),
        venue_at(1, "NL", 10.0, 0.0),
        venue_at(2, "NL", 20.0, 0.0),
    ];
    Graph::from_parts(venues, vec![agent_at(0, 0), agent_at(1, 0)]).unwrap()
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_expected_counts() {
        let graph = GraphBuilder::new(&config(4, 3, 2)).build(&mut SimRng::new(1)).unwrap();
        assert_eq!(graph.venue_count(), 4);
        assert_eq!(graph.agent_count(), 12);
        assert_eq!(graph.edges().count(), 12);
        assert_eq!(graph.nodes().count(), 16);
        let sick = graph.agents().iter().filter(|a| a.health == HealthState::Sick).count();
        assert_eq!(sick, 2);
    }

    #[test]
    fn agents_start_at_home() {
        let graph = GraphBuilder::new(&config(3, 2, 0)).build(&mut SimRng::new(1)).unwrap();
        for agent in graph.agents() {
            assert!(agent.is_home());
            assert_eq!(agent.home.index(), agent.id.index() / 2);
        }
        assert_eq!(graph.occupants(VenueId(1)), &[AgentId(2), AgentId(3)]);
    }

    #[test]
    fn every_agent_sick_when_requested() {
        let graph = GraphBuilder::new(&config(2, 2, 4)).build(&mut SimRng::new(1)).unwrap();
        assert!(graph.agents().iter().all(|a| a.health == HealthState::Sick));
    }

    #[test]
    fn too_many_sick_rejected() {
        let err = GraphBuilder::new(&config(2, 2, 5)).build(&mut SimRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            GraphError::Config(ConfigError::TooManySick { requested: 5, population: 4 })
        );
    }

    #[test]
    fn zero_houses_rejected() {
        let err = GraphBuilder::new(&config(0, 2, 0)).build(&mut SimRng::new(1)).unwrap_err();
        assert_eq!(err, GraphError::Config(ConfigError::NoHouses));
    }

    #[test]
    fn same_seed_same_sick_set() {
        let sick = |seed| {
            let g = GraphBuilder::new(&config(10, 5, 7)).build(&mut SimRng::new(seed)).unwrap();
            g.agents().iter().filter(|a| a.health == HealthState::Sick).map(|a| a.id).collect::<Vec<_>>()
        };
        assert_eq!(sick(9), sick(9));
    }

    #[test]
    fn display_ids() {
        let graph = GraphBuilder::new(&config(2, 3, 0)).build(&mut SimRng::new(1)).unwrap();
        assert_eq!(graph.venue(VenueId(1)).unwrap().label(), "house-1");
        assert_eq!(graph.agent_label(AgentId(4)).as_deref(), Some("house-1-1"));
        assert_eq!(graph.agent_label(AgentId(99)), None);
    }
}

// ── Layouts ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout_tests {
    use super::*;

    fn houses(n: u32) -> Vec<Venue> {
        (0..n).map(|i| Venue::new(VenueId(i), VenueKind::house())).collect()
    }

    #[test]
    fn grid_is_square_and_row_major() {
        let mut venues = houses(5);
        GridLayout::default().apply(&mut venues, &mut SimRng::new(0));
        assert_eq!(venues[0].position, Point::new(0.0, 0.0));
        assert_eq!(venues[2].position, Point::new(200.0, 0.0));
        assert_eq!(venues[3].position, Point::new(0.0, 100.0));
        assert!(venues.iter().all(|v| v.kind.is_house()));
    }

    #[test]
    fn europe_relabels_48_venues() {
        let mut venues = houses(60);
        EuropeLayout::default().apply(&mut venues, &mut SimRng::new(4));
        let countries = venues.iter().filter(|v| !v.kind.is_house()).count();
        assert_eq!(countries, 48);
        assert!(venues.iter().all(|v| v.class.is_house()));
        assert!(venues.iter().any(|v| v.kind == *"DE"));
    }

    #[test]
    fn europe_with_few_venues_relabels_all() {
        let mut venues = houses(3);
        EuropeLayout::default().apply(&mut venues, &mut SimRng::new(4));
        assert!(venues.iter().all(|v| !v.kind.is_house()));
    }

    #[test]
    fn europe_projection() {
        let layout = EuropeLayout::default();
        let de = epi_core::countries::find("DE").unwrap();
        let p = layout.project(de);
        assert!((p.x - (de.lon * 14.0 + 300.0)).abs() < 1e-3);
        assert!((p.y - (-de.lat * 14.0 + 1100.0)).abs() < 1e-3);
    }

    #[test]
    fn europe_graph_keeps_house_class_for_display() {
        let graph = GraphBuilder::new(&config(48, 1, 0))
            .layout(EuropeLayout::default())
            .build(&mut SimRng::new(2))
            .unwrap();
        assert!(graph.venues().iter().all(|v| v.label().starts_with("house-")));
        assert!(graph.nearest_of_kind("FR", Point::default()).is_some());
        assert!(graph.nearest_of_kind("house", Point::default()).is_none());
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn from_parts_rejects_dangling_location() {
        let mut agent = agent_at(0, 0);
        agent.location = VenueId(5);
        let err = Graph::from_parts(vec![venue_at(0, "house", 0.0, 0.0)], vec![agent]).unwrap_err();
        assert_eq!(err, GraphError::VenueNotFound(VenueId(5)));
    }

    #[test]
    fn nearest_of_kind_picks_closest() {
        let graph = line_graph();
        assert_eq!(graph.nearest_of_kind("NL", Point::new(0.0, 0.0)), Some(VenueId(1)));
        assert_eq!(graph.nearest_of_kind("NL", Point::new(19.0, 0.0)), Some(VenueId(2)));
        assert_eq!(graph.nearest_of_kind("DE", Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn has_kind_tracks_venue_kinds() {
        let graph = line_graph();
        assert!(graph.has_kind("NL"));
        assert!(graph.has_kind("house"));
        assert!(!graph.has_kind("DE"));
    }

    #[test]
    fn nearest_of_kind_tie_goes_to_lowest_id() {
        let graph = line_graph();
        assert_eq!(graph.nearest_of_kind("NL", Point::new(15.0, 0.0)), Some(VenueId(1)));
    }

    #[test]
    fn move_updates_location_and_occupants() {
        let mut graph = line_graph();
        assert_eq!(graph.move_agent(AgentId(0), VenueId(2)), Ok(MoveOutcome::Moved));
        assert_eq!(graph.agent(AgentId(0)).unwrap().location, VenueId(2));
        assert_eq!(graph.occupants(VenueId(0)), &[AgentId(1)]);
        assert_eq!(graph.occupants(VenueId(2)), &[AgentId(0)]);
        assert!(graph.edges().any(|e| e.agent == AgentId(0) && e.venue == VenueId(2)));
    }

    #[test]
    fn move_to_current_venue_is_unchanged() {
        let mut graph = line_graph();
        assert_eq!(graph.move_agent(AgentId(0), VenueId(0)), Ok(MoveOutcome::Unchanged));
        assert_eq!(graph.occupants(VenueId(0)).len(), 2);
    }

    #[test]
    fn locked_destination_vetoes_move() {
        let mut graph = line_graph();
        graph.set_locked(VenueId(1), true).unwrap();
        assert_eq!(graph.move_agent(AgentId(0), VenueId(1)), Ok(MoveOutcome::Locked));
        assert_eq!(graph.agent(AgentId(0)).unwrap().location, VenueId(0));
    }

    #[test]
    fn locked_source_vetoes_move() {
        let mut graph = line_graph();
        graph.set_locked(VenueId(0), true).unwrap();
        assert_eq!(graph.move_agent(AgentId(1), VenueId(2)), Ok(MoveOutcome::Locked));
        assert!(graph.occupants(VenueId(2)).is_empty());
    }

    #[test]
    fn move_unknown_ids_errors() {
        let mut graph = line_graph();
        assert_eq!(graph.move_agent(AgentId(9), VenueId(0)), Err(GraphError::AgentNotFound(AgentId(9))));
        assert_eq!(graph.move_agent(AgentId(0), VenueId(9)), Err(GraphError::VenueNotFound(VenueId(9))));
    }

    #[test]
    fn toggle_lock_flips_venues_only() {
        let mut graph = line_graph();
        assert_eq!(graph.toggle_lock(NodeKey::Venue(VenueId(1))), Some(true));
        assert!(graph.venue(VenueId(1)).unwrap().locked);
        assert_eq!(graph.toggle_lock(NodeKey::Venue(VenueId(1))), Some(false));
        assert_eq!(graph.toggle_lock(NodeKey::Agent(AgentId(0))), None);
        assert_eq!(graph.toggle_lock(NodeKey::Venue(VenueId(42))), None);
    }

    #[test]
    fn nodes_expose_health_for_agents() {
        let mut graph = line_graph();
        graph.set_health(AgentId(1), HealthState::Sick).unwrap();
        let sick: Vec<NodeKey> = graph
            .nodes()
            .filter(|n| n.health() == Some(HealthState::Sick))
            .map(|n| n.key())
            .collect();
        assert_eq!(sick, vec![NodeKey::Agent(AgentId(1))]);
        assert!(matches!(graph.nodes().next(), Some(Node::Venue(_))));
    }
}
