//! Repeated-sampling item picker
//!
//! The picker answers "what should I read/play next?" without being a plain
//! uniform draw. Given a filter and a run count, it draws `num_runs`
//! independent uniform samples **with replacement** from the eligible items,
//! counts occurrences per distinct item, and takes the item with the highest
//! count. If several items tie at the top, the whole round is redrawn - not
//! just the tied subset - until a single winner emerges. The result is a
//! generate-and-vote selection: every eligible item can win, but each round
//! concentrates on whatever the random source favored across many draws.
//!
//! Samples come from the operating system's random source
//! ([`rand::rngs::OsRng`]). Picks are deliberately not reproducible; there
//! is no seed to replay.
//!
//! Distinct items are counted by equality, which for the backlog models is
//! identity equality (title + authors for books, name + platform for games),
//! not full structural equality.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::filters::Filter;

/// Errors surfaced when a pick cannot produce an item
#[derive(Debug, Error)]
pub enum PickError {
    /// The candidate collection itself was empty
    #[error("Cannot pick from an empty backlog")]
    EmptyBacklog,
    /// The filter rejected every candidate; carries the filter description
    /// so the user can see what to relax
    #[error("No eligible items from which to choose after applying filter: {filter}")]
    NoMatch { filter: String },
}

type Result<T> = std::result::Result<T, PickError>;

/// Picks one item from a collection by repeated-sampling majority vote
pub struct Picker<T> {
    num_runs: usize,
    filter: Box<dyn Filter<T>>,
}

impl<T> Picker<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a picker drawing `num_runs` samples per voting round
    ///
    /// `num_runs` must be at least 1; the CLI layer enforces this before a
    /// picker is ever constructed.
    #[must_use]
    pub fn new(num_runs: usize, filter: impl Filter<T> + 'static) -> Self {
        debug_assert!(num_runs >= 1, "num_runs must be positive");
        Self {
            num_runs,
            filter: Box::new(filter),
        }
    }

    /// Pick one item out of `items`
    ///
    /// Filters the collection, then votes until a round produces a unique
    /// most-drawn item. A singleton eligible set wins its first round. The
    /// tie-break loop has no iteration cap: with at least one eligible item
    /// it terminates with probability 1, but a pathological uniform tie
    /// (say two items at one run per round) is not bounded in time.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::EmptyBacklog`] when `items` is empty, and
    /// [`PickError::NoMatch`] when the filter rejects every item. The
    /// returned item always satisfies the filter; there is no fallback to
    /// an unfiltered pick.
    pub fn pick(&self, items: &[T]) -> Result<T> {
        if items.is_empty() {
            return Err(PickError::EmptyBacklog);
        }
        let eligible: Vec<&T> = items.iter().filter(|item| self.filter.matches(item)).collect();
        if eligible.is_empty() {
            return Err(PickError::NoMatch {
                filter: format!("{:?}", self.filter),
            });
        }
        loop {
            if let [winner] = self.sample_round(&eligible).as_slice() {
                return Ok((*winner).clone());
            }
        }
    }

    /// Run one voting round: the set of items tied for the highest count
    fn sample_round<'a>(&self, eligible: &[&'a T]) -> Vec<&'a T> {
        let mut counts: HashMap<&T, usize> = HashMap::new();
        for _ in 0..self.num_runs {
            let drawn = eligible[OsRng.gen_range(0..eligible.len())];
            *counts.entry(drawn).or_insert(0) += 1;
        }
        let top = counts.values().copied().max().unwrap_or(0);
        counts
            .into_iter()
            .filter(|&(_, count)| count == top)
            .map(|(item, _)| item)
            .collect()
    }
}
