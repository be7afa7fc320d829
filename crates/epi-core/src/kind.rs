//! Venue kind labels.
//!
//! A kind is either the household kind `"house"` or a two-letter ISO country
//! code (`"NL"`, `"DE"`, …).  Movement transition tables are keyed by kind
//! and emit kinds as destinations, so the type is a thin string wrapper that
//! borrows as `str` for cheap map lookups.

use std::borrow::Borrow;
use std::fmt;

/// The kind every household venue is created with.
pub const HOUSE: &str = "house";

/// Label naming a class of venue.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VenueKind(String);

impl VenueKind {
    pub fn new(label: impl Into<String>) -> Self {
        VenueKind(label.into())
    }

    /// The household kind.
    pub fn house() -> Self {
        VenueKind(HOUSE.to_owned())
    }

    #[inline]
    pub fn is_house(&self) -> bool {
        self.0 == HOUSE
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VenueKind {
    fn from(label: &str) -> Self {
        VenueKind(label.to_owned())
    }
}

impl Borrow<str> for VenueKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VenueKind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
