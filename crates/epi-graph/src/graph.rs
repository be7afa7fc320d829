//! The `Graph` arena, its co-location index, and the nearest-venue lookup.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use epi_core::{AgentId, HealthState, Point, VenueId, VenueKind};

use crate::{Agent, Edge, GraphError, GraphResult, Node, NodeKey, Venue};

// ── R-tree venue entry ────────────────────────────────────────────────────────

/// Entry stored in a per-kind R-tree: a venue's layout point and its id.
#[derive(Clone, Debug)]
struct VenueEntry {
    point: [f32; 2],
    id:    VenueId,
}

impl RTreeObject for VenueEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VenueEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        Point::from(self.point).distance_2(Point::from(*point))
    }
}

// ── MoveOutcome ───────────────────────────────────────────────────────────────

/// Result of asking the graph to relocate an agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The agent now occupies the destination.
    Moved,
    /// The agent was already there.
    Unchanged,
    /// The source or destination venue is quarantined; nothing changed.
    Locked,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Venues, agents, and the indices derived from them.
///
/// Do not construct directly in simulation code; use
/// [`GraphBuilder`][crate::GraphBuilder].
#[derive(Clone, Debug)]
pub struct Graph {
    venues:    Vec<Venue>,
    agents:    Vec<Agent>,
    /// `VenueId → agents currently there`, kept in sync by `move_agent`.
    occupants: Vec<Vec<AgentId>>,
    /// `kind → R-tree of venues with that kind`.
    by_kind:   FxHashMap<VenueKind, RTree<VenueEntry>>,
}

impl Graph {
    /// Assemble a graph from dense arenas.
    ///
    /// `venues[i].id` must be `VenueId(i)` and `agents[i].id` must be
    /// `AgentId(i)`; every agent's `home` and `location` must name an
    /// existing venue.
    pub fn from_parts(venues: Vec<Venue>, agents: Vec<Agent>) -> GraphResult<Self> {
        for (i, venue) in venues.iter().enumerate() {
            if venue.id.index() != i {
                return Err(GraphError::VenueNotFound(venue.id));
            }
        }

        let mut occupants = vec![Vec::new(); venues.len()];
        for (i, agent) in agents.iter().enumerate() {
            if agent.id.index() != i {
                return Err(GraphError::AgentNotFound(agent.id));
            }
            if agent.home.index() >= venues.len() {
                return Err(GraphError::VenueNotFound(agent.home));
            }
            let Some(here) = occupants.get_mut(agent.location.index()) else {
                return Err(GraphError::VenueNotFound(agent.location));
            };
            here.push(agent.id);
        }

        let mut entries: FxHashMap<VenueKind, Vec<VenueEntry>> = FxHashMap::default();
        for venue in &venues {
            entries
                .entry(venue.kind.clone())
                .or_default()
                .push(VenueEntry { point: venue.position.to_array(), id: venue.id });
        }
        let by_kind = entries
            .into_iter()
            .map(|(kind, list)| (kind, RTree::bulk_load(list)))
            .collect();

        Ok(Self { venues, agents, occupants, by_kind })
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venues.get(id.index())
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Agents currently at `venue`.  Empty for unknown ids.
    pub fn occupants(&self, venue: VenueId) -> &[AgentId] {
        self.occupants.get(venue.index()).map_or(&[], Vec::as_slice)
    }

    /// Every node, venues first, for rendering.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        self.venues
            .iter()
            .map(Node::Venue)
            .chain(self.agents.iter().map(Node::Agent))
    }

    /// The containment edges, one per agent, derived from agent locations.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.agents.iter().map(|a| Edge { agent: a.id, venue: a.location })
    }

    /// Display id of an agent, e.g. `house-3-1`.
    pub fn agent_label(&self, id: AgentId) -> Option<String> {
        let agent = self.agent(id)?;
        let home = self.venue(agent.home)?;
        Some(format!("{}-{}", home.label(), agent.slot))
    }

    /// Whether any venue carries `kind`.
    pub fn has_kind(&self, kind: &str) -> bool {
        self.by_kind.contains_key(kind)
    }

    /// The venue of kind `kind` closest to `from`.  Equidistant venues
    /// resolve to the lowest `VenueId`.  `None` if no venue has that kind.
    pub fn nearest_of_kind(&self, kind: &str, from: Point) -> Option<VenueId> {
        let tree = self.by_kind.get(kind)?;
        let query = from.to_array();
        let mut candidates = tree.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best) = candidates.next()?;
        let mut chosen = first.id;
        for (entry, d2) in candidates {
            if d2 > best {
                break;
            }
            chosen = chosen.min(entry.id);
        }
        Some(chosen)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Relocate `agent` to `destination`, honouring quarantine on both ends.
    pub fn move_agent(&mut self, agent: AgentId, destination: VenueId) -> GraphResult<MoveOutcome> {
        let source = self
            .agent(agent)
            .ok_or(GraphError::AgentNotFound(agent))?
            .location;
        let dest = self.venue(destination).ok_or(GraphError::VenueNotFound(destination))?;

        if source == destination {
            return Ok(MoveOutcome::Unchanged);
        }
        if dest.locked || self.venues[source.index()].locked {
            return Ok(MoveOutcome::Locked);
        }

        let here = &mut self.occupants[source.index()];
        if let Some(pos) = here.iter().position(|&a| a == agent) {
            here.swap_remove(pos);
        }
        self.occupants[destination.index()].push(agent);
        self.agents[agent.index()].location = destination;
        Ok(MoveOutcome::Moved)
    }

    pub fn set_health(&mut self, agent: AgentId, health: HealthState) -> GraphResult<()> {
        let a = self.agents.get_mut(agent.index()).ok_or(GraphError::AgentNotFound(agent))?;
        a.health = health;
        Ok(())
    }

    pub fn set_locked(&mut self, venue: VenueId, locked: bool) -> GraphResult<()> {
        let v = self.venues.get_mut(venue.index()).ok_or(GraphError::VenueNotFound(venue))?;
        v.locked = locked;
        Ok(())
    }

    /// Flip quarantine on a venue and return its new state.  Agents (and
    /// unknown ids) are ignored and yield `None`.
    pub fn toggle_lock(&mut self, node: NodeKey) -> Option<bool> {
        match node {
            NodeKey::Agent(_) => None,
            NodeKey::Venue(id) => {
                let venue = self.venues.get_mut(id.index())?;
                venue.locked = !venue.locked;
                Some(venue.locked)
            }
        }
    }
}
