// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised by the configurable entry points.
///
/// The plain `distance`/`batch_distance` functions are total and never
/// return one of these.
#[derive(Error, Debug)]
pub enum DistanceError {
    #[error("input of {len} units exceeds the configured maximum of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("candidate {index} failed")]
    Candidate {
        index: usize,
        #[source]
        source: Box<DistanceError>,
    },

    #[error("unknown unit '{0}' (expected 'char' or 'byte')")]
    InvalidUnit(String),

    #[error("invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DistanceError>;
