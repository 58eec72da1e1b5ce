// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for triple search.

use thiserror::Error;

use crate::finder::Formulation;
use crate::triple::Triple;

/// Errors reported by the library.
///
/// A non-positive bound is not an error: it simply has no triples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Two formulations produced different sequences for the same bound.
    ///
    /// `expected` and `found` are the entries at `index`; either is `None`
    /// when that sequence is shorter.
    #[error(
        "{formulation} disagrees with {reference} for bound {bound} at position {index}: \
         expected {expected:?}, found {found:?}"
    )]
    FormulationMismatch {
        formulation: Formulation,
        reference: Formulation,
        bound: i64,
        index: usize,
        expected: Option<Triple>,
        found: Option<Triple>,
    },
}
