//! Node and edge types.

use epi_core::{AgentId, HealthState, Point, VenueId, VenueKind};

/// A place agents occupy: a household or a country.
#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    pub id: VenueId,

    /// The kind the venue was created as.  Forms the prefix of its display
    /// id (`house-3`) and keys the movement transition table.
    pub class: VenueKind,

    /// The label movement targets match against.  Starts equal to `class`;
    /// a layout may relabel it (e.g. to a country code).
    pub kind: VenueKind,

    /// Quarantine: blocks every move into or out of this venue.
    pub locked: bool,

    /// Layout coordinates, used only for nearest-venue selection.
    pub position: Point,
}

impl Venue {
    pub fn new(id: VenueId, class: VenueKind) -> Self {
        Self {
            id,
            kind: class.clone(),
            class,
            locked: false,
            position: Point::default(),
        }
    }

    /// Display id, e.g. `house-3`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.class, self.id.0)
    }
}

/// A simulated inhabitant.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id: AgentId,
    pub home: VenueId,
    pub location: VenueId,
    pub health: HealthState,
    /// Position within the household; together with `home` it forms the
    /// display id `house-<home>-<slot>`.
    pub slot: u32,
}

impl Agent {
    #[inline]
    pub fn is_home(&self) -> bool {
        self.location == self.home
    }
}

/// Borrowed view of either node variant, in the shape the host renders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Node<'a> {
    Venue(&'a Venue),
    Agent(&'a Agent),
}

impl Node<'_> {
    pub fn key(&self) -> NodeKey {
        match self {
            Node::Venue(v) => NodeKey::Venue(v.id),
            Node::Agent(a) => NodeKey::Agent(a.id),
        }
    }

    pub fn health(&self) -> Option<HealthState> {
        match self {
            Node::Venue(_) => None,
            Node::Agent(a) => Some(a.health),
        }
    }
}

/// Identifies a node of either variant, e.g. the target of a host click.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeKey {
    Venue(VenueId),
    Agent(AgentId),
}

/// Containment: the agent is currently at the venue.  Exactly one per agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub agent: AgentId,
    pub venue: VenueId,
}
