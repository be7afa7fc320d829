//! Movement transition tables and the border-policy table set.

use rustc_hash::FxHashMap;

use epi_core::countries::{EUROPE, PARTIAL_OPEN};
use epi_core::kind::HOUSE;
use epi_core::{BorderPolicy, VenueKind};

use crate::{Label, ModelError, ModelResult};

/// `Base` entries emitted around each country in the stock tables, so a
/// travelling house draw lands on a given country 1 time in 7 per country.
const BASE_PER_COUNTRY: usize = 6;

/// Maps a location class (the venue's id prefix, e.g. `house`) to the
/// sequence of labels an agent there may draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
    rows: FxHashMap<VenueKind, Vec<Label>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the row for `class`.
    pub fn with_row(mut self, class: impl Into<VenueKind>, labels: Vec<Label>) -> Self {
        self.rows.insert(class.into(), labels);
        self
    }

    /// The label sequence for `class`, if the table has one.
    #[inline]
    pub fn row(&self, class: &str) -> Option<&[Label]> {
        self.rows.get(class).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every venue kind any row can send an agent to.
    pub fn destinations(&self) -> impl Iterator<Item = &VenueKind> {
        self.rows.values().flatten().filter_map(|label| match label {
            Label::Venue(kind) => Some(kind),
            _ => None,
        })
    }

    /// Reject tables a uniform pick would be undefined over.
    pub fn validate(&self) -> ModelResult<()> {
        if self.rows.is_empty() {
            return Err(ModelError::EmptyTable);
        }
        if let Some((class, _)) = self.rows.iter().find(|(_, labels)| labels.is_empty()) {
            return Err(ModelError::EmptyRow(class.clone()));
        }
        Ok(())
    }
}

/// The three precomputed tables a [`BorderPolicy`] selects between.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyTables {
    pub open:    TransitionTable,
    pub partial: TransitionTable,
    pub closed:  TransitionTable,
}

impl PolicyTables {
    /// Stock European tables: every country when open, a Benelux-centred
    /// subset when partial, and home-only when closed.
    pub fn europe() -> Self {
        let all: Vec<&str> = EUROPE.iter().map(|c| c.code).collect();
        Self {
            open:    TransitionTable::new().with_row(HOUSE, spread_countries(&all)),
            partial: TransitionTable::new().with_row(HOUSE, spread_countries(&PARTIAL_OPEN)),
            closed:  TransitionTable::new().with_row(HOUSE, vec![Label::Base]),
        }
    }

    /// Resolve the table active for `policy`, failing fast on a degenerate
    /// table rather than at the first draw.
    pub fn select(&self, policy: BorderPolicy) -> ModelResult<&TransitionTable> {
        let table = match policy {
            BorderPolicy::Open    => &self.open,
            BorderPolicy::Partial => &self.partial,
            BorderPolicy::Closed  => &self.closed,
        };
        table.validate()?;
        Ok(table)
    }
}

impl Default for PolicyTables {
    fn default() -> Self {
        Self::europe()
    }
}

/// `[Base ×3, code, Base ×3]` for each code, concatenated.
fn spread_countries(codes: &[&str]) -> Vec<Label> {
    let before = BASE_PER_COUNTRY / 2;
    let after = BASE_PER_COUNTRY - before;
    let mut labels = Vec::with_capacity(codes.len() * (BASE_PER_COUNTRY + 1));
    for code in codes {
        labels.extend(std::iter::repeat_n(Label::Base, before));
        labels.push(Label::venue(code));
        labels.extend(std::iter::repeat_n(Label::Base, after));
    }
    labels
}
