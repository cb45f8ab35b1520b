//! Levenshtein edit distance for single pairs, batches and distance matrices.
//!
//! The engine is the classic Wagner–Fischer dynamic program reduced to a single
//! working column. Everything else is a wrapper around it: the batch runner
//! applies it to many candidates against one reference, and the matrix builder
//! applies the batch runner to many references.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy/     │────▶│   batch.rs   │────▶│  matrix.rs   │
//! │ (distance,   │     │ (batch_      │     │ (distance_   │
//! │  within)     │     │  distance)   │     │  matrix, CSV)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │        config.rs  ·  error.rs  ·  contracts.rs      │
//! │  (Unit, DistanceConfig, DistanceError, invariants)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Units
//!
//! Distances count Unicode scalar values by default, so `"你好"` is two units.
//! [`Unit::Byte`] counts raw UTF-8 bytes instead. Neither mode normalizes or
//! segments graphemes.
//!
//! # Usage
//!
//! ```
//! use levbatch::{batch_distance, distance};
//!
//! assert_eq!(distance("hello", "hello world"), 6);
//!
//! let results = batch_distance(&["hello", "hello world"], "hello world");
//! assert_eq!(results, vec![6, 0]);
//! ```

pub mod batch;
pub mod config;
pub mod contracts;
pub mod demo;
pub mod error;
pub mod fuzzy;
pub mod matrix;
pub mod testing;

pub use batch::{
    batch_distance, batch_distance_cancellable, batch_distance_cancellable_in,
    batch_distance_cancellable_with, batch_distance_in, batch_distance_with,
    batch_normalized_distance, batch_normalized_distance_with, normalize_batch,
};
#[cfg(feature = "parallel")]
pub use batch::{batch_distance_parallel, batch_distance_parallel_in};
pub use config::{DistanceConfig, Unit};
pub use error::{DistanceError, Result};
pub use fuzzy::{
    distance, distance_bytes, distance_in, distance_slices, distance_with, distance_within,
    normalized_distance, normalized_distance_in,
};
pub use matrix::{
    distance_matrix, distance_matrix_with_progress, read_column, write_pairs_csv, DistanceMatrix,
    DistancePair, DEFAULT_COLUMN, DEFAULT_THRESHOLD,
};
