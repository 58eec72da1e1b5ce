// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three formulations against each other and against known results.

mod common;

use common::assert_valid_sequence;
use strum::IntoEnumIterator;
use triple_search::predicates::Solutions;
use triple_search::{
    find, run, solve_backtracking, solve_comprehension, solve_nested, verify, Config,
    Formulation, SearchError, Triple, TripleList,
};

/// Expected stdout of `triples` with no arguments, minus the newline.
const EXPECTED_100: &str = "[(1, 2, 5), (1, 3, 10), (1, 4, 17), (1, 5, 26), (1, 6, 37), \
(1, 7, 50), (1, 8, 65), (1, 9, 82), (2, 3, 13), (2, 4, 20), (2, 5, 29), (2, 6, 40), \
(2, 7, 53), (2, 8, 68), (2, 9, 85), (3, 4, 25), (3, 5, 34), (3, 6, 45), (3, 7, 58), \
(3, 8, 73), (3, 9, 90), (4, 5, 41), (4, 6, 52), (4, 7, 65), (4, 8, 80), (4, 9, 97), \
(5, 6, 61), (5, 7, 74), (5, 8, 89), (6, 7, 85), (6, 8, 100)]";

#[test]
fn test_find_100_matches_reference_output() {
    let triples = find(100);
    assert_eq!(triples.len(), 31);
    assert_eq!(triples.first(), Some(&Triple::new(1, 2, 5)));
    assert_eq!(triples.last(), Some(&Triple::new(6, 8, 100)));
    assert_eq!(TripleList(&triples).to_string(), EXPECTED_100);
}

#[test]
fn test_concrete_scenarios() {
    assert!(find(1).is_empty());
    assert_eq!(find(5), vec![Triple::new(1, 2, 5)]);

    let ten = find(10);
    assert_eq!(ten, vec![Triple::new(1, 2, 5), Triple::new(1, 3, 10)]);
    assert!(!ten.contains(&Triple::new(2, 3, 13)));
}

#[test]
fn test_non_positive_bounds_are_empty() {
    for n in [0, -1, -5] {
        for formulation in Formulation::iter() {
            assert!(formulation.solve(n).is_empty(), "{} for {}", formulation, n);
        }
    }
}

#[test]
fn test_formulations_agree() {
    for n in 0..=60 {
        let nested = solve_nested(n);
        assert_eq!(solve_comprehension(n), nested, "comprehension, bound {}", n);
        assert_eq!(solve_backtracking(n), nested, "backtracking, bound {}", n);
        assert_eq!(verify(n), Ok(nested));
    }
}

#[test]
fn test_results_are_valid_and_ordered() {
    for n in [1, 2, 5, 13, 50, 100] {
        for formulation in Formulation::iter() {
            assert_valid_sequence(n, &formulation.solve(n));
        }
    }
}

#[test]
fn test_results_are_complete() {
    // Every valid triple within the bound is found, checked from the c side.
    let n = 100;
    let found = find(n);
    let mut expected = Vec::new();
    for c in 1..=n {
        for a in 1..=n {
            for b in (a + 1)..c {
                if a * a + b * b == c {
                    expected.push(Triple::new(a, b, c));
                }
            }
        }
    }
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_lazy_solutions_match() {
    let lazy: Vec<Triple> = Solutions::new(100).collect();
    assert_eq!(lazy, find(100));
}

#[test]
fn test_run_reports_chosen_formulation() {
    let config = Config {
        bound: 100,
        formulation: Formulation::Backtracking,
        verify: false,
    };
    assert_eq!(TripleList(&run(&config).unwrap()).to_string(), EXPECTED_100);
}

#[test]
fn test_mismatch_error_message() {
    let err = SearchError::FormulationMismatch {
        formulation: Formulation::Comprehension,
        reference: Formulation::Nested,
        bound: 10,
        index: 1,
        expected: Some(Triple::new(1, 3, 10)),
        found: None,
    };
    let message = err.to_string();
    assert!(message.starts_with("comprehension disagrees with nested for bound 10 at position 1"));
    assert!(message.contains("found None"));
}
