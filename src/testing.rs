//! Test utilities shared across unit tests, integration tests, benches and fuzzing.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the reference oracles the optimized engine is checked against.

#![doc(hidden)]

/// Full-matrix Wagner–Fischer distance over Unicode scalar values.
///
/// O(nm) time and space. Slow but obviously correct: every cell is filled from
/// the textbook recurrence with no buffer reuse and no argument swapping.
pub fn oracle_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    oracle_distance_slices(&a, &b)
}

/// [`oracle_distance`] over raw UTF-8 bytes.
pub fn oracle_distance_bytes(s1: &str, s2: &str) -> usize {
    oracle_distance_slices(s1.as_bytes(), s2.as_bytes())
}

/// Full-matrix distance over arbitrary unit slices.
pub fn oracle_distance_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 0..=m {
        table[i][0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[m][n]
}

pub use crate::demo::{DEMO_CANDIDATES, DEMO_REFERENCE};

/// Expected distances for [`DEMO_CANDIDATES`] when comparing code points.
pub const DEMO_EXPECTED_CHARS: [usize; 4] = [6, 0, 16, 11];

/// Expected distances for [`DEMO_CANDIDATES`] when comparing bytes.
pub const DEMO_EXPECTED_BYTES: [usize; 4] = [6, 0, 16, 15];
