// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `Triple` value type and the predicate that defines it.
//!
//! A triple here is *not* a Pythagorean triple: the sum of squares is
//! compared against `c` itself, not `c * c`.

use std::fmt;

/// Returns true when `a * a + b * b == c`.
///
/// ```
/// use triple_search::is_triple;
///
/// assert!(is_triple(1, 2, 5));
/// assert!(!is_triple(3, 4, 5));
/// ```
pub fn is_triple(a: i64, b: i64, c: i64) -> bool {
    a * a + b * b == c
}

/// An ordered triple `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Triple {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    /// Check the full invariant for a bound: `1 <= a < b < c <= bound` and `is_triple`.
    pub fn is_valid_within(&self, bound: i64) -> bool {
        1 <= self.a
            && self.a < self.b
            && self.b < self.c
            && self.c <= bound
            && is_triple(self.a, self.b, self.c)
    }
}

impl From<(i64, i64, i64)> for Triple {
    fn from((a, b, c): (i64, i64, i64)) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Display adapter rendering a slice of triples as `[(1, 2, 5), (1, 3, 10)]`.
pub struct TripleList<'a>(pub &'a [Triple]);

impl fmt::Display for TripleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, triple) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", triple)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_triple_compares_against_c_not_c_squared() {
        assert!(is_triple(1, 2, 5));
        assert!(is_triple(6, 8, 100));
        assert!(!is_triple(3, 4, 5));
        assert!(!is_triple(6, 8, 10));
    }

    #[test]
    fn test_display() {
        assert_eq!(Triple::new(1, 2, 5).to_string(), "(1, 2, 5)");
        assert_eq!(TripleList(&[]).to_string(), "[]");
        let list = [Triple::new(1, 2, 5), Triple::new(1, 3, 10)];
        assert_eq!(TripleList(&list).to_string(), "[(1, 2, 5), (1, 3, 10)]");
    }

    #[test]
    fn test_is_valid_within() {
        let t = Triple::from((2, 3, 13));
        assert!(t.is_valid_within(13));
        assert!(!t.is_valid_within(12));

        // Predicate holds but ordering does not.
        assert!(!Triple::new(2, 1, 5).is_valid_within(10));
    }
}
