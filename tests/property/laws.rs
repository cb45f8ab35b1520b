//! Metric laws: identity, symmetry, triangle inequality, empty-string length.

use crate::common::{unicode_strategy, word_strategy};
use levbatch::{distance, distance_bytes, Unit};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: a string is at distance 0 from itself.
    #[test]
    fn prop_identity(a in unicode_strategy()) {
        prop_assert_eq!(distance(&a, &a), 0);
        prop_assert_eq!(distance_bytes(&a, &a), 0);
    }

    /// Property: distance is 0 only for equal strings.
    #[test]
    fn prop_zero_iff_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b) == 0, a == b);
    }

    /// Property: argument order does not matter.
    #[test]
    fn prop_symmetry(a in unicode_strategy(), b in unicode_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        prop_assert_eq!(distance_bytes(&a, &b), distance_bytes(&b, &a));
    }

    /// Property: going through a midpoint is never shorter.
    #[test]
    fn prop_triangle_inequality(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    /// Property: distance to the empty string is the length, in either unit.
    #[test]
    fn prop_empty_is_length(a in unicode_strategy()) {
        prop_assert_eq!(distance(&a, ""), Unit::Char.len_of(&a));
        prop_assert_eq!(distance("", &a), Unit::Char.len_of(&a));
        prop_assert_eq!(distance_bytes(&a, ""), a.len());
        prop_assert_eq!(distance_bytes("", &a), a.len());
    }

    /// Property: length difference <= distance <= longer length.
    #[test]
    fn prop_length_bounds(a in unicode_strategy(), b in unicode_strategy()) {
        let (m, n) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(m.abs_diff(n) <= d);
        prop_assert!(d <= m.max(n));
    }

    /// Property: on ASCII input the two units agree exactly.
    #[test]
    fn prop_units_agree_on_ascii(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance_bytes(&a, &b));
    }
}
