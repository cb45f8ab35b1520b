// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed demonstration set printed by `levbatch demo`.
//!
//! Covers a prefix, an exact match, a longer ASCII sentence and a CJK string
//! whose distance depends on the [`Unit`](crate::Unit).

/// Candidates compared against [`DEMO_REFERENCE`], in print order.
pub const DEMO_CANDIDATES: [&str; 4] = ["hello", "hello world", "hello, fine. thank you", "你好，世界"];

pub const DEMO_REFERENCE: &str = "hello world";
