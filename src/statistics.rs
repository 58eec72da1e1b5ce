// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Candidates that passed both ordering guards.
    Candidates,
    /// Triples collected.
    Solutions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            stats: [0; Counters::COUNT],
        }
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_predicate_always() {
        let mut ctx = SearchContext::new(10);
        let mut pred = Statistics::counting_predicate(Counters::Candidates, None);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 2);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 0);
    }

    #[test]
    fn test_counting_predicate_with_filter() {
        let mut ctx = SearchContext::new(10);
        fn fully_bound(ctx: &SearchContext) -> bool {
            ctx.current_triple().is_some()
        }
        let mut pred = Statistics::counting_predicate(
            Counters::Solutions,
            Some(fully_bound as fn(&SearchContext) -> bool),
        );
        // Filter fails but the predicate still succeeds.
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 0);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Solutions);
        assert_eq!(stats.to_string(), "candidates=0, solutions=1");
    }
}
