// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for edit distance results.
//!
//! Debug-mode assertions for the mathematical properties every distance must
//! satisfy. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Cheap**: O(1) per pair, O(1) per batch
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                  |
//! |------------------------------|-------------------------------------------|
//! | `check_distance_bounds`      | `\|m - n\| <= d <= max(m, n)`             |
//! | `check_batch_aligned`        | `len(output) == len(candidates)`          |
//! | `check_matrix_shape`         | `rows == sources`, `cols == targets`      |
//! | `check_within_consistent`    | `within(a, b, k) == (d <= k)`             |

/// Check that a distance lies between the length difference and the longer length.
///
/// INVARIANT: the length difference is a lower bound (that many inserts are unavoidable).
/// INVARIANT: the longer length is an upper bound (substitute the overlap, insert the rest).
#[inline]
pub fn check_distance_bounds(m: usize, n: usize, distance: usize) {
    debug_assert!(
        m.abs_diff(n) <= distance,
        "Contract violation: distance {} below length difference |{} - {}|",
        distance,
        m,
        n
    );
    debug_assert!(
        distance <= m.max(n),
        "Contract violation: distance {} above max length max({}, {})",
        distance,
        m,
        n
    );
}

/// Check that a batch produced exactly one result per candidate.
///
/// INVARIANT: output[i] corresponds to candidate[i].
#[inline]
pub fn check_batch_aligned(candidates: usize, results: usize) {
    debug_assert_eq!(
        candidates, results,
        "Contract violation: batch returned {} results for {} candidates",
        results, candidates
    );
}

/// Check that a distance matrix has one row per source and one column per target.
///
/// INVARIANT: rows[i][j] = distance(targets[j], sources[i]).
#[inline]
pub fn check_matrix_shape(rows: &[Vec<usize>], sources: usize, targets: usize) {
    debug_assert_eq!(
        rows.len(),
        sources,
        "Contract violation: matrix has {} rows for {} sources",
        rows.len(),
        sources
    );
    for (i, row) in rows.iter().enumerate() {
        debug_assert_eq!(
            row.len(),
            targets,
            "Contract violation: matrix row {} has {} cells for {} targets",
            i,
            row.len(),
            targets
        );
    }
}

/// Check that the bounded check agrees with the exact distance.
///
/// INVARIANT: early exit never rejects a pair that is actually within `max`.
#[inline]
pub fn check_within_consistent(distance: usize, max: usize, within: bool) {
    debug_assert_eq!(
        within,
        distance <= max,
        "Contract violation: within(max = {}) returned {} but distance is {}",
        max,
        within,
        distance
    );
}
