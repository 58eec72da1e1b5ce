// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deterministic tests on bound variables. They never open a choice point.

use crate::context::{SearchContext, Variable};
use crate::engine::{Predicate, PredicateResult};
use crate::triple::is_triple;

/// `Left < Right`. Fails if either side is unbound.
#[derive(Debug)]
pub struct LessThanPredicate {
    left: Variable,
    right: Variable,
}

impl LessThanPredicate {
    pub fn new(left: Variable, right: Variable) -> Self {
        Self { left, right }
    }
}

impl Predicate for LessThanPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match (ctx.value(self.left), ctx.value(self.right)) {
            (Some(left), Some(right)) if left < right => PredicateResult::Success,
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "LessThan"
    }
}

/// `C =:= A*A + B*B`, over the current bindings.
#[derive(Debug)]
pub struct IsTriplePredicate;

impl Predicate for IsTriplePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.current_triple() {
            Some(t) if is_triple(t.a, t.b, t.c) => PredicateResult::Success,
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "IsTriple"
    }
}
