//! The wager book - twelve ordered monthly buckets.
//!
//! Order inside a bucket is insertion order. It is the display order of a
//! month and the tie-break when sorting wagers by date.

use super::{Month, Wager};

/// Wagers partitioned by month bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WagerBook {
    buckets: [Vec<Wager>; 12],
}

impl WagerBook {
    /// Creates a book with twelve empty months.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wagers of one month, in insertion order.
    #[must_use]
    pub fn month(&self, month: Month) -> &[Wager] {
        &self.buckets[month.index()]
    }

    /// Mutable bucket of one month.
    pub fn month_mut(&mut self, month: Month) -> &mut Vec<Wager> {
        &mut self.buckets[month.index()]
    }

    /// Appends a wager to a month and returns its position in that month.
    pub fn push(&mut self, month: Month, wager: Wager) -> usize {
        let bucket = self.month_mut(month);
        bucket.push(wager);
        bucket.len() - 1
    }

    /// Every month with its wagers, in calendar order.
    pub fn months(&self) -> impl Iterator<Item = (Month, &[Wager])> {
        Month::ALL
            .into_iter()
            .map(|m| (m, self.buckets[m.index()].as_slice()))
    }

    /// Every wager with its month, in calendar then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &Wager)> {
        self.months()
            .flat_map(|(month, wagers)| wagers.iter().map(move |w| (month, w)))
    }

    /// Every wager, in calendar then insertion order.
    pub fn wagers(&self) -> impl Iterator<Item = &Wager> {
        self.buckets.iter().flatten()
    }

    /// Mutable access to every wager across all months.
    pub fn wagers_mut(&mut self) -> impl Iterator<Item = &mut Wager> {
        self.buckets.iter_mut().flatten()
    }

    /// Total number of wagers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when no month holds a wager.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
