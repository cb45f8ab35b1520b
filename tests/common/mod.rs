//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical fixtures from levbatch::testing
pub use levbatch::testing::{
    oracle_distance, oracle_distance_bytes, DEMO_CANDIDATES, DEMO_EXPECTED_BYTES,
    DEMO_EXPECTED_CHARS, DEMO_REFERENCE,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a small alphabet, so random pairs actually share units.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,10}").unwrap()
}

/// Arbitrary Unicode, including multi-byte scalar values.
pub fn unicode_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ē', '你', '好', '，', 'ట', '🦀']),
        0..8,
    )
    .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

/// A batch of candidates, possibly empty.
pub fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..20)
}
