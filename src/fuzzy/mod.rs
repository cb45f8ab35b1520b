// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance between a single pair of strings.
//!
//! One exact engine (`distance_slices`) that every unit-specific entry point
//! funnels into, plus a bounded check that can bail out early.

mod levenshtein;

pub use levenshtein::*;
