// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `between(Low, High, Var)`: enumerate integers into a variable.

use crate::context::{SearchContext, Variable};
use crate::engine::{Predicate, PredicateResult};

/// Binds `var` to each integer in `low..=high`, ascending, one per choice.
///
/// An empty range (`high < low`) fails immediately.
#[derive(Debug)]
pub struct BetweenPredicate {
    var: Variable,
    low: i64,
    high: i64,
}

impl BetweenPredicate {
    pub fn new(var: Variable, low: i64, high: i64) -> Self {
        Self { var, low, high }
    }

    /// Number of integers in the range.
    pub fn count(&self) -> usize {
        if self.high < self.low {
            0
        } else {
            usize::try_from(self.high.abs_diff(self.low))
                .ok()
                .and_then(|n| n.checked_add(1))
                .unwrap_or(usize::MAX)
        }
    }
}

impl Predicate for BetweenPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match self.count() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let Ok(offset) = i64::try_from(choice) else {
            return PredicateResult::Failure;
        };
        match self.low.checked_add(offset) {
            Some(value) if value <= self.high => {
                ctx.bind(self.var, value);
                PredicateResult::Success
            }
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Between"
    }
}
