// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the single-column distance engine.
//!
//! Checks the engine against the full-matrix oracle in both units, plus the
//! metric laws that hold for any input. If the engine lies about distances,
//! every batch built on it lies too.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levbatch::testing::{oracle_distance, oracle_distance_bytes};
use levbatch::{distance, distance_bytes, distance_within};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a_bytes: Vec<u8>,
    b_bytes: Vec<u8>,
    max: u8,
}

fuzz_target!(|input: PairInput| {
    let a = String::from_utf8_lossy(&input.a_bytes).into_owned();
    let b = String::from_utf8_lossy(&input.b_bytes).into_owned();

    // Cap lengths so the O(nm) oracle stays fast
    let a: String = a.chars().take(64).collect();
    let b: String = b.chars().take(64).collect();

    let d = distance(&a, &b);

    // INVARIANT 1: engine agrees with the oracle in both units
    assert_eq!(d, oracle_distance(&a, &b), "chars: a={:?} b={:?}", a, b);
    assert_eq!(
        distance_bytes(&a, &b),
        oracle_distance_bytes(&a, &b),
        "bytes: a={:?} b={:?}",
        a,
        b
    );

    // INVARIANT 2: symmetry
    assert_eq!(d, distance(&b, &a));

    // INVARIANT 3: identity
    assert_eq!(distance(&a, &a), 0);

    // INVARIANT 4: bounded check agrees with exact distance
    let max = input.max as usize;
    assert_eq!(distance_within(&a, &b, max), d <= max);
});
