// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The backtracking formulation of the triple search is the conjunction
//!
//! ```text
//! triple(N, A, B, C) :-
//!     between(1, N, A), between(1, N, B), A < B,
//!     between(1, N, C), B < C,
//!     C =:= A*A + B*B.
//! ```
//!
//! run by the [`SearchEngine`](crate::engine::SearchEngine). Each goal is one
//! predicate; see [`triple_program`].
//!
//! # Organization
//!
//! - `between`: enumerates a variable over a range
//! - `guard`: deterministic tests (`<`, the triple predicate)
//! - `collect`: records the current solution
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`

pub mod between;
pub mod collect;
pub mod guard;

pub use between::BetweenPredicate;
pub use collect::CollectPredicate;
pub use guard::{IsTriplePredicate, LessThanPredicate};

use tracing::{debug, info};

use crate::context::{SearchContext, Variable};
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine, TerminalPredicate};
use crate::statistics::{Counters, Statistics};
use crate::triple::Triple;

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking into the previous choice point. Ending
/// a program with it makes the engine explore every alternative, like
/// `findall/3`.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine and hands the current state to the caller. Resuming
/// continues with the next alternative, so a program ending with it yields
/// one solution per call to `search`.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

/// Build the triple program for bound `n`, closed by `terminal`.
pub fn triple_program<P: TerminalPredicate + 'static>(n: i64, terminal: Box<P>) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(BetweenPredicate::new(Variable::A, 1, n)))
        .add(Box::new(BetweenPredicate::new(Variable::B, 1, n)))
        .add(Box::new(LessThanPredicate::new(Variable::A, Variable::B)))
        .add(Box::new(BetweenPredicate::new(Variable::C, 1, n)))
        .add(Box::new(LessThanPredicate::new(Variable::B, Variable::C)))
        .add(Statistics::counting_predicate(Counters::Candidates, None))
        .add(Box::new(IsTriplePredicate))
        .add(Box::new(CollectPredicate))
        .terminal(terminal)
        .build()
}

/// What an exhaustive backtracking search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub solutions: Vec<Triple>,
    pub statistics: Statistics,
}

/// Run the triple program to exhaustion.
pub fn run_backtracking(n: i64) -> SearchOutcome {
    let mut ctx = SearchContext::new(n);
    let engine = triple_program(n, Box::new(FailPredicate));
    if engine.search(&mut ctx).is_some() {
        // Unreachable with FAIL as terminal; nothing else suspends.
        debug!(bound = n, "backtracking search suspended unexpectedly");
    }
    info!(bound = n, statistics = %ctx.statistics, "backtracking search exhausted");
    SearchOutcome {
        solutions: ctx.solutions,
        statistics: ctx.statistics,
    }
}

/// Backtracking formulation: all solutions, in discovery order.
pub fn solve_backtracking(n: i64) -> Vec<Triple> {
    run_backtracking(n).solutions
}

/// Lazy iterator over the triples for bound `n`, one engine resumption per item.
///
/// ```
/// use triple_search::predicates::Solutions;
/// use triple_search::Triple;
///
/// let mut solutions = Solutions::new(100);
/// assert_eq!(solutions.next(), Some(Triple::new(1, 2, 5)));
/// assert_eq!(solutions.next(), Some(Triple::new(1, 3, 10)));
/// ```
pub struct Solutions {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl Solutions {
    pub fn new(n: i64) -> Self {
        Self {
            ctx: SearchContext::new(n),
            engine: Some(triple_program(n, Box::new(SuspendPredicate))),
        }
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for Solutions {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        self.engine.as_ref()?;
        self.ctx.solutions.pop()
    }
}
