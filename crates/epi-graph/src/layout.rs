//! Layout collaborators: assign venue positions (and, for the Europe map,
//! country kinds) before the graph indexes them.
//!
//! Positions matter to the simulation only through nearest-venue selection,
//! so a layout that relabels kinds must also place those venues sensibly.

use epi_core::countries::{Country, EUROPE};
use epi_core::{Point, SimRng, VenueKind};

use crate::Venue;

/// Assigns layout positions to freshly built venues.
///
/// Called once per build, after venues exist and before the graph's spatial
/// index is populated.  May change `kind` but must not touch `id` or `class`.
pub trait Layout {
    fn apply(&self, venues: &mut [Venue], rng: &mut SimRng);
}

// ── GridLayout ────────────────────────────────────────────────────────────────

/// Square grid, row-major in `VenueId` order.  Keeps every kind as built.
#[derive(Copy, Clone, Debug)]
pub struct GridLayout {
    pub spacing: f32,
    pub origin:  Point,
}

impl GridLayout {
    pub const DEFAULT_SPACING: f32 = 100.0;

    /// Position of cell `index` in a grid with `columns` columns.
    fn cell(&self, index: usize, columns: usize) -> Point {
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        Point::new(self.origin.x + col * self.spacing, self.origin.y + row * self.spacing)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { spacing: Self::DEFAULT_SPACING, origin: Point::default() }
    }
}

impl Layout for GridLayout {
    fn apply(&self, venues: &mut [Venue], _rng: &mut SimRng) {
        let columns = grid_columns(venues.len());
        for (i, venue) in venues.iter_mut().enumerate() {
            venue.position = self.cell(i, columns);
        }
    }
}

fn grid_columns(n: usize) -> usize {
    ((n as f64).sqrt().ceil() as usize).max(1)
}

// ── EuropeLayout ──────────────────────────────────────────────────────────────

/// Map of Europe: a random subset of venues becomes the countries.
///
/// Venues are shuffled; the first 48 are relabelled with a country code and
/// placed at that country's projected centroid.  Any further venues keep
/// their `house` kind and are laid out on a grid below the map.
#[derive(Copy, Clone, Debug)]
pub struct EuropeLayout {
    /// Layout units per degree.
    pub scale:    f32,
    /// Layout x of longitude 0.
    pub offset_x: f32,
    /// Layout y of latitude 0 (y grows southwards).
    pub offset_y: f32,
}

impl EuropeLayout {
    pub fn project(&self, country: &Country) -> Point {
        Point::new(
            country.lon * self.scale + self.offset_x,
            -country.lat * self.scale + self.offset_y,
        )
    }
}

impl Default for EuropeLayout {
    fn default() -> Self {
        Self { scale: 14.0, offset_x: 300.0, offset_y: 1100.0 }
    }
}

impl Layout for EuropeLayout {
    fn apply(&self, venues: &mut [Venue], rng: &mut SimRng) {
        let mut order: Vec<usize> = (0..venues.len()).collect();
        rng.shuffle(&mut order);

        let (mapped, rest) = order.split_at(order.len().min(EUROPE.len()));
        for (&i, country) in mapped.iter().zip(EUROPE.iter()) {
            venues[i].kind = VenueKind::from(country.code);
            venues[i].position = self.project(country);
        }

        // Overflow grid starts one row below the southernmost centroid.
        let south = EUROPE
            .iter()
            .map(|c| self.project(c).y)
            .fold(f32::MIN, f32::max);
        let grid = GridLayout {
            spacing: GridLayout::DEFAULT_SPACING,
            origin:  Point::new(0.0, south + GridLayout::DEFAULT_SPACING),
        };
        let columns = grid_columns(rest.len());
        for (slot, &i) in rest.iter().enumerate() {
            venues[i].position = grid.cell(slot, columns);
        }
    }
}
