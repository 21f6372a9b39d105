//! Bounded collection of contributors and their summed footprint.

use crate::Contributor;

/// Number of contributors held by default (one per category)
pub const DEFAULT_CAPACITY: usize = 3;

/// Notice shown when a contributor is turned away
pub const CAPACITY_NOTICE: &str = "Cannot add more components. Max capacity reached.";

/// Result of offering a contributor to the aggregator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// The aggregator was full and the contributor was dropped
    CapacityReached,
}

impl Admission {
    pub fn is_accepted(self) -> bool {
        self == Admission::Accepted
    }
}

/// Holds up to `capacity` contributors in insertion order
#[derive(Clone, Debug)]
pub struct FootprintAggregator {
    contributors: Vec<Contributor>,
    capacity: usize,
}

impl Default for FootprintAggregator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FootprintAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contributors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a contributor unless the aggregator is already full
    ///
    /// A full aggregator discards the contributor and reports
    /// [`Admission::CapacityReached`]; it never fails.
    #[must_use]
    pub fn add_contributor(&mut self, contributor: Contributor) -> Admission {
        if self.contributors.len() >= self.capacity {
            tracing::warn!(
                "Dropping {} contributor: capacity of {} reached",
                contributor.category(),
                self.capacity
            );
            return Admission::CapacityReached;
        }

        tracing::debug!(
            "Added {} contributor with impact {}",
            contributor.category(),
            contributor.impact()
        );
        self.contributors.push(contributor);
        Admission::Accepted
    }

    /// Sum of every held contributor's impact, recomputed on each call
    pub fn total_impact(&self) -> f64 {
        self.contributors.iter().map(Contributor::impact).sum()
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
