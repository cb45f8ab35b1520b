// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the levbatch distance engine.
//!
//! This standalone crate extracts the single-column Wagner–Fischer engine and
//! checks it exhaustively for all inputs up to a small length bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds index and no arithmetic overflow or underflow,
//!    including when one side is empty
//! 2. **Empty side**: distance(a, []) == len(a)
//! 3. **Bounds**: |m - n| <= distance <= max(m, n)
//! 4. **Symmetry** and **identity**

/// Largest input length the proofs enumerate.
pub const MAX_LEN: usize = 4;

// ============================================================================
// DISTANCE ENGINE (mirrors src/fuzzy/levenshtein.rs)
// ============================================================================

/// Single-column edit distance, shorter side as the column.
pub fn distance_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (s1, s2) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = s1.len();

    if m == 0 {
        return s2.len();
    }

    let mut column: Vec<usize> = (0..=m).collect();

    for (x, u2) in s2.iter().enumerate() {
        let mut lastdiag = column[0];
        column[0] = x + 1;

        for (y, u1) in s1.iter().enumerate() {
            let olddiag = column[y + 1];
            let cost = usize::from(u1 != u2);
            column[y + 1] = (column[y + 1] + 1).min(column[y] + 1).min(lastdiag + cost);
            lastdiag = olddiag;
        }
    }

    column[m]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic slice of length at most MAX_LEN over a 2-letter alphabet.
    fn any_word(buf: &mut [u8; MAX_LEN]) -> usize {
        for slot in buf.iter_mut() {
            *slot = kani::any_where(|&c: &u8| c < 2);
        }
        kani::any_where(|&n: &usize| n <= MAX_LEN)
    }

    /// Verify distance never panics and stays within the length bounds.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_distance_bounds() {
        let mut a_buf = [0u8; MAX_LEN];
        let mut b_buf = [0u8; MAX_LEN];
        let m = any_word(&mut a_buf);
        let n = any_word(&mut b_buf);
        let (a, b) = (&a_buf[..m], &b_buf[..n]);

        let d = distance_slices(a, b);

        kani::assert(m.abs_diff(n) <= d, "distance must be at least the length difference");
        kani::assert(d <= m.max(n), "distance must be at most the longer length");
    }

    /// Verify the empty-side case returns the other length without indexing.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_empty_side() {
        let mut a_buf = [0u8; MAX_LEN];
        let m = any_word(&mut a_buf);
        let a = &a_buf[..m];

        kani::assert(distance_slices(a, &[]) == m, "distance(a, []) must be len(a)");
        kani::assert(distance_slices(&[], a) == m, "distance([], a) must be len(a)");
    }

    /// Verify symmetry and identity.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_symmetry_and_identity() {
        let mut a_buf = [0u8; MAX_LEN];
        let mut b_buf = [0u8; MAX_LEN];
        let m = any_word(&mut a_buf);
        let n = any_word(&mut b_buf);
        let (a, b) = (&a_buf[..m], &b_buf[..n]);

        kani::assert(distance_slices(a, b) == distance_slices(b, a), "distance must be symmetric");
        kani::assert(distance_slices(a, a) == 0, "distance(a, a) must be 0");
    }
}
