// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three formulations of the triple search.
//!
//! All of them visit candidates in the same order (`a`, then `b`, then `c`,
//! each ascending over `1..=n`) and apply the same guards `a < b` and `b < c`,
//! so their outputs agree element by element:
//!
//! - [`solve_nested`]: explicit nested loops
//! - [`solve_comprehension`]: iterator adaptors over the same ranges
//! - [`solve_backtracking`]: predicates run by the backtracking engine
//!
//! ```
//! use triple_search::{find, Triple};
//!
//! assert_eq!(find(5), vec![Triple::new(1, 2, 5)]);
//! assert!(find(0).is_empty());
//! ```

use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::error::SearchError;
use crate::predicates::solve_backtracking;
use crate::triple::{is_triple, Triple};

/// Find all triples with every component in `1..=n`.
///
/// This is the nested-loop formulation; a bound below 1 yields no triples.
pub fn find(n: i64) -> Vec<Triple> {
    solve_nested(n)
}

/// Imperative formulation: three nested loops.
pub fn solve_nested(n: i64) -> Vec<Triple> {
    let mut result = Vec::new();
    for a in 1..=n {
        for b in 1..=n {
            if a < b {
                for c in 1..=n {
                    if b < c && is_triple(a, b, c) {
                        result.push(Triple::new(a, b, c));
                    }
                }
            }
        }
    }
    result
}

/// Lazy iterator over the triples for bound `n`, in discovery order.
pub fn triples(n: i64) -> impl Iterator<Item = Triple> {
    (1..=n).flat_map(move |a| {
        (1..=n).filter(move |&b| a < b).flat_map(move |b| {
            (1..=n)
                .filter(move |&c| b < c)
                .filter(move |&c| is_triple(a, b, c))
                .map(move |c| Triple::new(a, b, c))
        })
    })
}

/// Declarative formulation: a filtered comprehension.
pub fn solve_comprehension(n: i64) -> Vec<Triple> {
    triples(n).collect()
}

/// The available formulations of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Formulation {
    Nested,
    Comprehension,
    Backtracking,
}

impl Formulation {
    pub fn solve(self, n: i64) -> Vec<Triple> {
        let result = match self {
            Formulation::Nested => solve_nested(n),
            Formulation::Comprehension => solve_comprehension(n),
            Formulation::Backtracking => solve_backtracking(n),
        };
        debug!(formulation = %self, bound = n, found = result.len(), "solved");
        result
    }
}

/// Run every formulation for bound `n` and check they agree with the nested one.
///
/// Returns the shared result, or the first disagreement found.
pub fn verify(n: i64) -> Result<Vec<Triple>, SearchError> {
    use strum::IntoEnumIterator;

    let reference = Formulation::Nested;
    let expected = reference.solve(n);
    for formulation in Formulation::iter().filter(|&f| f != reference) {
        let found = formulation.solve(n);
        if let Some(index) = first_difference(&expected, &found) {
            return Err(SearchError::FormulationMismatch {
                formulation,
                reference,
                bound: n,
                index,
                expected: expected.get(index).copied(),
                found: found.get(index).copied(),
            });
        }
    }
    Ok(expected)
}

fn first_difference(expected: &[Triple], found: &[Triple]) -> Option<usize> {
    let common = expected.len().min(found.len());
    (0..common)
        .find(|&i| expected[i] != found[i])
        .or((expected.len() != found.len()).then_some(common))
}
