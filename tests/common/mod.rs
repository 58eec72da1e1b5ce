// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use triple_search::context::{SearchContext, Variable};
use triple_search::{Predicate, PredicateResult, Triple};

/// Assert every triple satisfies `1 <= a < b < c <= bound`, `a*a + b*b == c`,
/// and that the sequence is strictly increasing (hence duplicate free).
pub fn assert_valid_sequence(bound: i64, triples: &[Triple]) {
    for triple in triples {
        assert!(
            triple.is_valid_within(bound),
            "{} is not a valid triple within {}",
            triple,
            bound
        );
    }
    for pair in triples.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{} and {} are out of discovery order",
            pair[0],
            pair[1]
        );
    }
}

/// Predicate that tries integers in `[start, end)`, binding each to a variable.
#[derive(Debug)]
pub struct IntegerRangePredicate {
    var: Variable,
    start: i64,
    end: i64,
}

impl IntegerRangePredicate {
    pub fn new(var: Variable, start: i64, end: i64) -> Self {
        Self { var, start, end }
    }

    fn count(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }
}

impl Predicate for IntegerRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match self.count() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.bind(self.var, self.start + choice as i64);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "IntegerRange"
    }
}

/// Predicate that succeeds N times using SuccessSamePredicate (for testing rounds).
#[derive(Debug)]
pub struct MultiRoundPredicate {
    rounds: usize,
}

impl MultiRoundPredicate {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else if round + 1 == self.rounds {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}
