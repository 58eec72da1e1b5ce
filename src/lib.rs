// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerate integer triples `(a, b, c)` with `1 <= a < b < c <= N` and
//! `a*a + b*b == c`.
//!
//! Note the predicate compares the sum of squares against `c`, not `c*c`:
//! these are not Pythagorean triples.
//!
//! # Formulations
//!
//! The same brute-force search is written three ways, which must agree
//! element by element for every bound:
//!
//! 1. **Nested**: three explicit nested loops
//! 2. **Comprehension**: a declarative chain of iterator adaptors
//! 3. **Backtracking**: the Prolog program
//!    `between(1,N,A), between(1,N,B), A < B, between(1,N,C), B < C, C =:= A*A+B*B`
//!    run by a small WAM-like engine with trail-based undo
//!
//! # Architecture
//!
//! - [`triple`]: the `Triple` value type and `is_triple`
//! - [`finder`]: the nested and comprehension formulations, `Formulation`, `verify`
//! - [`engine`]: the non-deterministic search engine and the `Predicate` trait
//! - [`context`] / [`trail`]: logic variables and their undo log
//! - [`predicates`]: the goals of the backtracking formulation
//! - [`statistics`]: counters bumped during search
//! - [`config`]: run configuration consumed by the `triples` binary
//!
//! # Example
//!
//! ```
//! use triple_search::{find, verify, TripleList};
//!
//! let triples = find(10);
//! assert_eq!(TripleList(&triples).to_string(), "[(1, 2, 5), (1, 3, 10)]");
//! assert_eq!(verify(10).unwrap(), triples);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod finder;
pub mod predicates;
pub mod statistics;
pub mod trail;
pub mod triple;

// Re-export commonly used types
pub use config::{run, Config};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::SearchError;
pub use finder::{find, solve_comprehension, solve_nested, triples, verify, Formulation};
pub use predicates::solve_backtracking;
pub use trail::Trail;
pub use triple::{is_triple, Triple, TripleList};
