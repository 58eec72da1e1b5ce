// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for the backtracking formulation.
//!
//! The SearchContext combines:
//! - The bound of the search (immutable)
//! - The logic variables `A`, `B`, `C` and the trail that undoes their bindings
//! - The solutions collected so far and the statistics counters
//!
//! Solutions and statistics are deliberately *not* trailed: they accumulate
//! across backtracking, the way `findall/3` does.

use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro};

use crate::statistics::Statistics;
use crate::trail::Trail;
use crate::triple::Triple;

/// A logic variable of the triple program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCountMacro)]
#[repr(u8)]
pub enum Variable {
    A,
    B,
    C,
}

/// Current values of the logic variables (`None` means unbound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    values: [Option<i64>; Variable::COUNT],
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            values: [None; Variable::COUNT],
        }
    }
}

impl Bindings {
    pub fn get(&self, var: Variable) -> Option<i64> {
        self.values[var as usize]
    }

    /// Overwrite a value, returning the previous one. Untrailed.
    pub(crate) fn replace(&mut self, var: Variable, value: Option<i64>) -> Option<i64> {
        std::mem::replace(&mut self.values[var as usize], value)
    }
}

/// Mutable state threaded through every predicate.
///
/// # Example
///
/// ```
/// use triple_search::context::{SearchContext, Variable};
///
/// let mut ctx = SearchContext::new(10);
/// let checkpoint = ctx.trail.len();
/// ctx.bind(Variable::A, 3);
/// assert_eq!(ctx.value(Variable::A), Some(3));
///
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.value(Variable::A), None);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Inclusive upper bound for every variable.
    pub bound: i64,
    /// Undo log for `bindings`.
    pub trail: Trail,
    /// Current variable bindings.
    pub bindings: Bindings,
    /// Triples collected so far, in discovery order.
    pub solutions: Vec<Triple>,
    pub statistics: Statistics,
}

impl SearchContext {
    pub fn new(bound: i64) -> Self {
        Self {
            bound,
            trail: Trail::new(),
            bindings: Bindings::default(),
            solutions: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Bind a variable, recording the previous value on the trail.
    pub fn bind(&mut self, var: Variable, value: i64) {
        let old_value = self.bindings.replace(var, Some(value));
        self.trail.record_change(var, old_value);
    }

    pub fn value(&self, var: Variable) -> Option<i64> {
        self.bindings.get(var)
    }

    /// The triple formed by the current bindings, if all three are bound.
    pub fn current_triple(&self) -> Option<Triple> {
        Some(Triple::new(
            self.value(Variable::A)?,
            self.value(Variable::B)?,
            self.value(Variable::C)?,
        ))
    }

    /// Undo every binding made since `checkpoint` (a previous `trail.len()`).
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.bindings);
    }
}
