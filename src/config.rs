// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.

use tracing::info;

use crate::error::SearchError;
use crate::finder::{verify, Formulation};
use crate::triple::Triple;

/// Bound used when none is given.
pub const DEFAULT_BOUND: i64 = 100;

/// What to search for, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inclusive upper bound for every component.
    pub bound: i64,
    /// Formulation whose result is reported.
    pub formulation: Formulation,
    /// Cross-check every formulation before reporting.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            formulation: Formulation::Nested,
            verify: false,
        }
    }
}

/// Run the search described by `config`.
///
/// With `verify` set, all formulations are computed and the first
/// disagreement is returned as an error; since they agree, the chosen
/// formulation's result equals the verified one.
pub fn run(config: &Config) -> Result<Vec<Triple>, SearchError> {
    let triples = if config.verify {
        let triples = verify(config.bound)?;
        info!(bound = config.bound, "all formulations agree");
        triples
    } else {
        config.formulation.solve(config.bound)
    };
    info!(
        bound = config.bound,
        formulation = %config.formulation,
        found = triples.len(),
        "search complete"
    );
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bound, 100);
        assert_eq!(config.formulation, Formulation::Nested);
        assert!(!config.verify);
    }

    #[test]
    fn test_run_each_formulation() {
        for formulation in [
            Formulation::Nested,
            Formulation::Comprehension,
            Formulation::Backtracking,
        ] {
            let config = Config {
                bound: 20,
                formulation,
                verify: false,
            };
            assert_eq!(run(&config).unwrap().len(), 5);
        }
    }

    #[test]
    fn test_run_with_verify() {
        let config = Config {
            verify: true,
            ..Config::default()
        };
        assert_eq!(run(&config).unwrap().len(), 31);
    }
}
