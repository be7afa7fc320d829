//! Movement destination labels.

use std::fmt;

use epi_core::VenueKind;

/// What a movement transition asks an agent to do.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Label {
    /// Remain at the current venue.
    Stay,
    /// Return to the agent's home venue.
    Base,
    /// Travel to the nearest venue of this kind.
    Venue(VenueKind),
}

impl Label {
    pub fn venue(kind: &str) -> Self {
        Label::Venue(VenueKind::from(kind))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Stay        => f.write_str("stay"),
            Label::Base        => f.write_str("base"),
            Label::Venue(kind) => write!(f, "{kind}"),
        }
    }
}
