//! Deterministic simulation RNG and the random primitives built on it.
//!
//! # Determinism strategy
//!
//! The engine is single-threaded, so one `SmallRng` seeded from
//! `SimConfig::seed` drives every draw: home stickiness, label picks, sick
//! seeding, spread and progression, and the layout shuffle.  Draw order is
//! fixed by agent and venue index order, so the same seed reproduces a run
//! exactly.
//!
//! # Primitives
//!
//! - [`SimRng::weighted_choice`]: draw proportional to explicit weights.
//! - [`SimRng::choose`]: uniform pick; repeated entries encode weight.
//! - [`SimRng::sample_without_replacement`]: `k` distinct items, order
//!   preserved.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; collaborators such as layouts
/// borrow it rather than owning a stream of their own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Draw a value with probability proportional to its weight.
    ///
    /// Weights need not sum to 1.  Fails on an empty slice, on any negative
    /// or non-finite weight, and when no weight is positive.
    pub fn weighted_choice<'a, T>(&mut self, pairs: &'a [(f64, T)]) -> CoreResult<&'a T> {
        if pairs.iter().any(|(w, _)| !w.is_finite()) {
            return Err(CoreError::InvalidWeights);
        }
        let index = WeightedIndex::new(pairs.iter().map(|(w, _)| *w)).map_err(|e| match e {
            WeightedError::NoItem => CoreError::EmptyChoice,
            _ => CoreError::InvalidWeights,
        })?;
        Ok(&pairs[index.sample(&mut self.0)].1)
    }

    /// Return `k` distinct items from `items`, preserving their input order.
    ///
    /// If `k >= items.len()` every item is returned; never draws more than
    /// are available.
    pub fn sample_without_replacement<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        if k >= items.len() {
            return items.to_vec();
        }
        let mut picked = rand::seq::index::sample(&mut self.0, items.len(), k).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| items[i].clone()).collect()
    }
}
