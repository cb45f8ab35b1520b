// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for batch index alignment.
//!
//! Whatever the candidates look like, output[i] must be the single-pair
//! distance of candidate i, sequential and parallel runs must agree, and an
//! empty batch must stay empty.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levbatch::{batch_distance, batch_distance_with, distance, DistanceConfig};

#[derive(Debug, Arbitrary)]
struct BatchInput {
    reference: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: BatchInput| {
    let reference: String = input.reference.chars().take(32).collect();
    let candidates: Vec<String> = input
        .candidates
        .iter()
        .take(32)
        .map(|c| c.chars().take(32).collect())
        .collect();

    let results = batch_distance(&candidates, &reference);
    assert_eq!(results.len(), candidates.len());

    for (candidate, d) in candidates.iter().zip(&results) {
        assert_eq!(*d, distance(candidate, &reference));
    }

    let parallel = batch_distance_with(
        &candidates,
        &reference,
        &DistanceConfig::new().with_parallel(true),
    )
    .expect("no length cap configured");
    assert_eq!(parallel, results);
});
