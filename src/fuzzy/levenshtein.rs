// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wagner–Fischer edit distance over a single working column.
//!
//! The column holds one entry per unit of the shorter input plus one, so memory
//! is O(min(m, n)) and the buffer is a heap `Vec` freed when the call returns.
//! Swapping the inputs is sound because edit distance is symmetric.
//!
//! Column invariant: before processing `x` units of the longer input,
//! `column[y]` is the distance between the first `y` units of the shorter input
//! and the first `x` units of the longer one.

use crate::config::{DistanceConfig, Unit};
use crate::contracts::check_distance_bounds;
use crate::error::Result;

/// Edit distance between two unit slices.
///
/// Every insertion, deletion and substitution costs 1.
pub fn distance_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Column runs over the shorter side.
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
            column[y + 1] = (column[y + 1] + 1) // deletion
                .min(column[y] + 1) // insertion
                .min(lastdiag + cost); // substitution or match
            lastdiag = olddiag;
        }
    }

    let result = column[m];
    check_distance_bounds(m, s2.len(), result);
    result
}

/// Edit distance counted in Unicode scalar values.
///
/// ```
/// assert_eq!(levbatch::distance("kitten", "sitting"), 3);
/// assert_eq!(levbatch::distance("你好，世界", "hello world"), 11);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    // ASCII is one byte per scalar value, so skip the decode.
    if a.is_ascii() && b.is_ascii() {
        return distance_slices(a.as_bytes(), b.as_bytes());
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_slices(&a, &b)
}

/// Edit distance counted in raw UTF-8 bytes.
///
/// Multi-byte characters count once per byte, so non-ASCII text scores higher
/// than under [`distance`].
pub fn distance_bytes(a: &str, b: &str) -> usize {
    distance_slices(a.as_bytes(), b.as_bytes())
}

/// Distance in the given unit, without length checks.
pub fn distance_in(unit: Unit, a: &str, b: &str) -> usize {
    match unit {
        Unit::Char => distance(a, b),
        Unit::Byte => distance_bytes(a, b),
    }
}

/// Distance under `config`: unit granularity plus the optional length cap.
pub fn distance_with(a: &str, b: &str, config: &DistanceConfig) -> Result<usize> {
    config.check_len(a)?;
    config.check_len(b)?;
    Ok(distance_in(config.unit, a, b))
}

/// Distance divided by the longer input's length, in `[0.0, 1.0]`.
///
/// Two empty strings are identical, so they score `0.0` rather than dividing by zero.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    normalized_distance_in(Unit::Char, a, b)
}

/// [`normalized_distance`] in an explicit unit.
pub fn normalized_distance_in(unit: Unit, a: &str, b: &str) -> f64 {
    scale_by_longest(distance_in(unit, a, b), unit.len_of(a).max(unit.len_of(b)))
}

/// `distance / longest`, with two empty inputs scoring `0.0`.
pub(crate) fn scale_by_longest(distance: usize, longest: usize) -> f64 {
    if longest == 0 {
        return 0.0;
    }
    distance as f64 / longest as f64
}

/// Are these strings within `max` edits of each other?
///
/// Two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a column exceeds `max`, abandon the DP
///
/// Both are sound: the length difference is a lower bound on the distance,
/// and column minimums never decrease.
pub fn distance_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (s1, s2) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let m = s1.len();

    if s2.len() - m > max {
        return false;
    }
    if m == 0 {
        return s2.len() <= max;
    }

    let mut column: Vec<usize> = (0..=m).collect();
    for (x, u2) in s2.iter().enumerate() {
        let mut lastdiag = column[0];
        column[0] = x + 1;
        let mut min_col = column[0];

        for (y, u1) in s1.iter().enumerate() {
            let olddiag = column[y + 1];
            let cost = usize::from(u1 != u2);
            column[y + 1] = (column[y + 1] + 1).min(column[y] + 1).min(lastdiag + cost);
            lastdiag = olddiag;
            min_col = min_col.min(column[y + 1]);
        }

        if min_col > max {
            return false;
        }
    }

    column[m] <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistanceError;

    #[test]
    fn test_exact_match() {
        assert_eq!(distance("hello", "hello"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_empty_side_is_length_of_other() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance_bytes("", "é"), 2);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("saturday", "sunday"), 3);
        assert_eq!(distance("abc", "xyz"), 3);
    }

    #[test]
    fn test_one_edit() {
        assert_eq!(distance("hello", "hallo"), 1);
        assert_eq!(distance("hello", "hell"), 1);
        assert_eq!(distance("hello", "helloo"), 1);
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(distance("hello", "hello world"), 6);
        assert_eq!(distance("hello world", "hello"), 6);
    }

    #[test]
    fn test_unit_granularity() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance_bytes("café", "cafe"), 2);
        assert_eq!(distance("你好，世界", "hello world"), 11);
        assert_eq!(distance_bytes("你好，世界", "hello world"), 15);
    }

    #[test]
    fn test_generic_slices() {
        assert_eq!(distance_slices(&[1, 2, 3], &[1, 3]), 1);
        assert_eq!(distance_slices::<u32>(&[], &[]), 0);
    }

    #[test]
    fn test_distance_with_enforces_cap() {
        let config = DistanceConfig::new().with_max_len(Some(4));
        assert_eq!(distance_with("abcd", "abce", &config).unwrap(), 1);

        let err = distance_with("abcde", "a", &config).unwrap_err();
        assert!(matches!(err, DistanceError::InputTooLong { len: 5, max: 4 }));
    }

    #[test]
    fn test_distance_with_unit() {
        let config = DistanceConfig::new().with_unit(Unit::Byte);
        assert_eq!(distance_with("café", "cafe", &config).unwrap(), 2);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(normalized_distance("", ""), 0.0);
        assert_eq!(normalized_distance("abc", "abc"), 0.0);
        assert_eq!(normalized_distance("abc", "xyz"), 1.0);
        assert!((normalized_distance("hello", "hello world") - 6.0 / 11.0).abs() < 1e-12);
        assert_eq!(normalized_distance_in(Unit::Byte, "é", ""), 1.0);
    }

    #[test]
    fn test_within() {
        assert!(distance_within("hello", "hello", 0));
        assert!(distance_within("hello", "hxllo", 1));
        assert!(distance_within("photography", "phptography", 2));
        assert!(!distance_within("kitten", "sitting", 2));
        assert!(distance_within("kitten", "sitting", 3));
        assert!(distance_within("", "ab", 2));
        assert!(!distance_within("", "ab", 1));
    }

    #[test]
    fn test_within_early_exit_on_length() {
        // Length difference is 5, so distance must be >= 5
        assert!(!distance_within("a", "abcdef", 1));
    }

    #[test]
    fn test_within_unicode_diacritics() {
        assert!(distance_within("cafe", "café", 1));
        assert!(distance_within("harish", "harīṣh", 2));
    }
}
