//! Batch properties: index alignment, equivalence with single calls, parallel parity.

use std::sync::atomic::AtomicBool;

use crate::common::{candidates_strategy, unicode_strategy, word_strategy};
use levbatch::{
    batch_distance, batch_distance_cancellable, batch_distance_cancellable_in, batch_distance_in,
    batch_distance_with, batch_normalized_distance_with, distance, distance_bytes,
    normalized_distance_in, DistanceConfig, Unit,
};
use proptest::prelude::*;

proptest! {
    /// Property: output[i] == distance(candidates[i], reference).
    #[test]
    fn prop_batch_matches_single(candidates in candidates_strategy(), reference in word_strategy()) {
        let results = batch_distance(&candidates, &reference);
        prop_assert_eq!(results.len(), candidates.len());
        for (candidate, d) in candidates.iter().zip(&results) {
            prop_assert_eq!(*d, distance(candidate, &reference));
        }
    }

    /// Property: byte-unit batch matches byte-unit single calls.
    #[test]
    fn prop_byte_batch_matches_single(candidates in candidates_strategy(), reference in word_strategy()) {
        let results = batch_distance_in(Unit::Byte, &candidates, &reference);
        for (candidate, d) in candidates.iter().zip(&results) {
            prop_assert_eq!(*d, distance_bytes(candidate, &reference));
        }
    }

    /// Property: parallel and sequential configs give identical vectors.
    #[test]
    fn prop_parallel_matches_sequential(candidates in candidates_strategy(), reference in word_strategy()) {
        let sequential = batch_distance_with(
            &candidates,
            &reference,
            &DistanceConfig::new().with_parallel(false),
        ).unwrap();
        let parallel = batch_distance_with(
            &candidates,
            &reference,
            &DistanceConfig::new().with_parallel(true),
        ).unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    /// Property: an uncancelled run equals the plain batch.
    #[test]
    fn prop_uncancelled_is_complete(candidates in candidates_strategy(), reference in word_strategy()) {
        let cancel = AtomicBool::new(false);
        let results: Vec<usize> = batch_distance_cancellable(&candidates, &reference, &cancel)
            .into_iter()
            .map(|d| d.expect("not cancelled"))
            .collect();
        prop_assert_eq!(results, batch_distance(&candidates, &reference));
    }

    /// Property: an uncancelled run in bytes equals the byte batch.
    #[test]
    fn prop_uncancelled_bytes_is_complete(
        candidates in prop::collection::vec(unicode_strategy(), 0..10),
        reference in unicode_strategy(),
    ) {
        let cancel = AtomicBool::new(false);
        let results: Vec<Option<usize>> =
            batch_distance_cancellable_in(Unit::Byte, &candidates, &reference, &cancel);
        let expected: Vec<Option<usize>> = batch_distance_in(Unit::Byte, &candidates, &reference)
            .into_iter()
            .map(Some)
            .collect();
        prop_assert_eq!(results, expected);
    }

    /// Property: normalized batch entries equal pairwise normalized distances in either unit.
    #[test]
    fn prop_normalized_batch_matches_single(
        candidates in prop::collection::vec(unicode_strategy(), 0..10),
        reference in unicode_strategy(),
        bytes in any::<bool>(),
    ) {
        let unit = if bytes { Unit::Byte } else { Unit::Char };
        let config = DistanceConfig::new().with_unit(unit);
        let results = batch_normalized_distance_with(&candidates, &reference, &config).unwrap();
        prop_assert_eq!(results.len(), candidates.len());
        for (candidate, n) in candidates.iter().zip(&results) {
            prop_assert_eq!(*n, normalized_distance_in(unit, candidate, &reference));
            prop_assert!((0.0..=1.0).contains(n));
        }
    }

    /// Property: the batch never mutates or reorders its inputs.
    #[test]
    fn prop_inputs_untouched(candidates in candidates_strategy(), reference in word_strategy()) {
        let before = candidates.clone();
        let _ = batch_distance(&candidates, &reference);
        prop_assert_eq!(before, candidates);
    }
}
