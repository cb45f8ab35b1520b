//! Differential testing: the single-column engine against the full-matrix oracle.
//!
//! If they disagree, the oracle is right.

use crate::common::{oracle_distance, oracle_distance_bytes, unicode_strategy, word_strategy};
use levbatch::{distance, distance_bytes, distance_slices, distance_within};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential test: code-point distance matches oracle.
    #[test]
    fn diff_distance_chars(a in unicode_strategy(), b in unicode_strategy()) {
        prop_assert_eq!(
            distance(&a, &b),
            oracle_distance(&a, &b),
            "engine differs from oracle for ({:?}, {:?})",
            a, b
        );
    }

    /// Differential test: byte distance matches oracle.
    #[test]
    fn diff_distance_bytes(a in unicode_strategy(), b in unicode_strategy()) {
        prop_assert_eq!(distance_bytes(&a, &b), oracle_distance_bytes(&a, &b));
    }

    /// Differential test: generic slices of integers.
    #[test]
    fn diff_distance_slices(
        a in prop::collection::vec(0u8..4, 0..12),
        b in prop::collection::vec(0u8..4, 0..12),
    ) {
        prop_assert_eq!(
            distance_slices(&a, &b),
            levbatch::testing::oracle_distance_slices(&a, &b)
        );
    }

    /// Differential test: the bounded check never disagrees with the oracle.
    #[test]
    fn diff_within(a in word_strategy(), b in word_strategy(), max in 0usize..8) {
        prop_assert_eq!(distance_within(&a, &b, max), oracle_distance(&a, &b) <= max);
    }
}
