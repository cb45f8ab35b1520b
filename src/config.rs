// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration for distance computation.
//!
//! Everything that changes numeric results or resource usage lives here and is
//! passed explicitly, so tests can flip settings without rebuilding. The CLI
//! layers its flags on top of [`DistanceConfig::from_env`].
//!
//! # Environment overrides
//!
//! | Variable             | Values                   | Field      |
//! |----------------------|--------------------------|------------|
//! | `LEVBATCH_UNIT`      | `char`, `byte`           | `unit`     |
//! | `LEVBATCH_MAX_LEN`   | non-negative integer     | `max_len`  |
//! | `LEVBATCH_PARALLEL`  | `1`/`0`, `true`/`false`  | `parallel` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Result};

pub const ENV_UNIT: &str = "LEVBATCH_UNIT";
pub const ENV_MAX_LEN: &str = "LEVBATCH_MAX_LEN";
pub const ENV_PARALLEL: &str = "LEVBATCH_PARALLEL";

/// The atomic unit two strings are compared by.
///
/// `Char` compares Unicode scalar values, so "你" counts as one unit.
/// `Byte` compares raw UTF-8 code units, so "你" counts as three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Char,
    Byte,
}

impl Unit {
    /// Length of `s` measured in this unit.
    pub fn len_of(self, s: &str) -> usize {
        match self {
            Unit::Char => s.chars().count(),
            Unit::Byte => s.len(),
        }
    }
}

impl FromStr for Unit {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "char" | "chars" | "codepoint" => Ok(Unit::Char),
            "byte" | "bytes" => Ok(Unit::Byte),
            other => Err(DistanceError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Char => write!(f, "char"),
            Unit::Byte => write!(f, "byte"),
        }
    }
}

/// Settings for [`distance_with`](crate::distance_with) and the batch runners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceConfig {
    pub unit: Unit,
    /// Reject inputs longer than this many units instead of allocating for them.
    pub max_len: Option<usize>,
    /// Fan batch work out across the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Char,
            max_len: None,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl DistanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Defaults overlaid with `LEVBATCH_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(unit) = lookup(ENV_UNIT) {
            config.unit = unit.parse()?;
        }

        if let Some(max_len) = lookup(ENV_MAX_LEN) {
            let parsed = max_len
                .trim()
                .parse::<usize>()
                .map_err(|_| DistanceError::InvalidSetting {
                    name: ENV_MAX_LEN,
                    value: max_len.clone(),
                })?;
            config.max_len = Some(parsed);
        }

        if let Some(parallel) = lookup(ENV_PARALLEL) {
            config.parallel = match parallel.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(DistanceError::InvalidSetting {
                        name: ENV_PARALLEL,
                        value: parallel,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Fail fast if `s` is longer than `max_len`.
    pub fn check_len(&self, s: &str) -> Result<()> {
        if let Some(max) = self.max_len {
            let len = self.unit.len_of(s);
            if len > max {
                return Err(DistanceError::InputTooLong { len, max });
            }
        }
        Ok(())
    }
}
