// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recording solutions.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::statistics::Counters;

/// Appends the current `(A, B, C)` to `ctx.solutions`.
///
/// Fails if any variable is unbound. Solutions are not trailed, so they
/// survive the backtracking that follows.
#[derive(Debug)]
pub struct CollectPredicate;

impl Predicate for CollectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(triple) = ctx.current_triple() else {
            return PredicateResult::Failure;
        };
        debug!(%triple, "solution");
        ctx.solutions.push(triple);
        ctx.statistics.increment_counter(Counters::Solutions);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Collect"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Variable;
    use crate::triple::Triple;

    #[test]
    fn test_collect() {
        let mut ctx = SearchContext::new(10);
        let mut pred = CollectPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);

        ctx.bind(Variable::A, 1);
        ctx.bind(Variable::B, 2);
        ctx.bind(Variable::C, 5);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.solutions, vec![Triple::new(1, 2, 5)]);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
    }
}
