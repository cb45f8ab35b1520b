// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One reference string against many candidates.
//!
//! Every candidate is independent, so the batch is embarrassingly parallel.
//! With the `parallel` feature, rayon's indexed `par_iter().collect()` writes
//! each result into its candidate's slot, so output order never depends on
//! completion order.
//!
//! The reference is decoded once per batch rather than once per candidate.

use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{DistanceConfig, Unit};
use crate::contracts::check_batch_aligned;
use crate::error::{DistanceError, Result};
use crate::fuzzy::{distance_slices, scale_by_longest};

/// A reference string decoded into the units it will be compared by.
pub(crate) enum PreparedReference<'a> {
    Chars(Vec<char>),
    Bytes(&'a [u8]),
}

impl<'a> PreparedReference<'a> {
    pub(crate) fn new(unit: Unit, reference: &'a str) -> Self {
        match unit {
            Unit::Char => PreparedReference::Chars(reference.chars().collect()),
            Unit::Byte => PreparedReference::Bytes(reference.as_bytes()),
        }
    }

    pub(crate) fn distance_to(&self, candidate: &str) -> usize {
        match self {
            PreparedReference::Chars(reference) => {
                let candidate: Vec<char> = candidate.chars().collect();
                distance_slices(&candidate, reference)
            }
            PreparedReference::Bytes(reference) => distance_slices(candidate.as_bytes(), reference),
        }
    }
}

/// Distance from every candidate to `reference`, in candidate order.
///
/// `output[i] == distance(candidates[i], reference)`. An empty candidate list
/// gives an empty result.
///
/// ```
/// let d = levbatch::batch_distance(&["hello", "hello world"], "hello world");
/// assert_eq!(d, vec![6, 0]);
/// ```
pub fn batch_distance<S: AsRef<str>>(candidates: &[S], reference: &str) -> Vec<usize> {
    batch_distance_in(Unit::Char, candidates, reference)
}

/// [`batch_distance`] in an explicit unit.
pub fn batch_distance_in<S: AsRef<str>>(unit: Unit, candidates: &[S], reference: &str) -> Vec<usize> {
    let prepared = PreparedReference::new(unit, reference);
    let total = candidates.len();

    let results: Vec<usize> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            trace!(index, total, len = candidate.len(), candidate, "comparing candidate");
            prepared.distance_to(candidate)
        })
        .collect();

    check_batch_aligned(total, results.len());
    results
}

/// [`batch_distance`] fanned out over the rayon pool.
///
/// Produces exactly the same vector as the sequential version.
#[cfg(feature = "parallel")]
pub fn batch_distance_parallel<S>(candidates: &[S], reference: &str) -> Vec<usize>
where
    S: AsRef<str> + Sync,
{
    batch_distance_parallel_in(Unit::Char, candidates, reference)
}

/// [`batch_distance_parallel`] in an explicit unit.
#[cfg(feature = "parallel")]
pub fn batch_distance_parallel_in<S>(unit: Unit, candidates: &[S], reference: &str) -> Vec<usize>
where
    S: AsRef<str> + Sync,
{
    let prepared = PreparedReference::new(unit, reference);
    let results: Vec<usize> = candidates
        .par_iter()
        .map(|candidate| prepared.distance_to(candidate.as_ref()))
        .collect();

    check_batch_aligned(candidates.len(), results.len());
    results
}

/// Batch distance under `config`.
///
/// Fails fast if the reference or any candidate is longer than
/// `config.max_len`. A failing candidate fails the whole batch with
/// [`DistanceError::Candidate`] naming its index; no placeholder value is ever
/// substituted. When several candidates fail in parallel mode, which index is
/// reported is unspecified.
pub fn batch_distance_with<S>(
    candidates: &[S],
    reference: &str,
    config: &DistanceConfig,
) -> Result<Vec<usize>>
where
    S: AsRef<str> + Sync,
{
    config.check_len(reference)?;

    debug!(
        candidates = candidates.len(),
        unit = %config.unit,
        parallel = config.parallel,
        "running batch"
    );

    let prepared = PreparedReference::new(config.unit, reference);
    let compute = |index: usize, candidate: &S| -> Result<usize> {
        let candidate = candidate.as_ref();
        config
            .check_len(candidate)
            .map_err(|source| DistanceError::Candidate {
                index,
                source: Box::new(source),
            })?;
        Ok(prepared.distance_to(candidate))
    };

    #[cfg(feature = "parallel")]
    let results: Vec<usize> = if config.parallel {
        candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| compute(index, candidate))
            .collect::<Result<Vec<usize>>>()?
    } else {
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| compute(index, candidate))
            .collect::<Result<Vec<usize>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<usize> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| compute(index, candidate))
        .collect::<Result<Vec<usize>>>()?;

    check_batch_aligned(candidates.len(), results.len());
    Ok(results)
}

/// Each candidate's distance to `reference` divided by the longer of the two
/// lengths, in candidate order.
///
/// `output[i] == normalized_distance(candidates[i], reference)`.
pub fn batch_normalized_distance<S>(candidates: &[S], reference: &str) -> Vec<f64>
where
    S: AsRef<str>,
{
    let distances = batch_distance_in(Unit::Char, candidates, reference);
    normalize_batch(Unit::Char, candidates, reference, &distances)
}

/// [`batch_normalized_distance`] under `config`, with the same failure rules
/// as [`batch_distance_with`].
pub fn batch_normalized_distance_with<S>(
    candidates: &[S],
    reference: &str,
    config: &DistanceConfig,
) -> Result<Vec<f64>>
where
    S: AsRef<str> + Sync,
{
    let distances = batch_distance_with(candidates, reference, config)?;
    Ok(normalize_batch(config.unit, candidates, reference, &distances))
}

/// Scale already-computed batch distances by each pair's longer length.
pub fn normalize_batch<S: AsRef<str>>(
    unit: Unit,
    candidates: &[S],
    reference: &str,
    distances: &[usize],
) -> Vec<f64> {
    check_batch_aligned(candidates.len(), distances.len());
    let reference_len = unit.len_of(reference);
    candidates
        .iter()
        .zip(distances)
        .map(|(candidate, &d)| scale_by_longest(d, unit.len_of(candidate.as_ref()).max(reference_len)))
        .collect()
}

/// Batch distance that stops starting new candidates once `cancel` is set.
///
/// The flag is checked between candidates only, never mid-computation, so
/// every `Some(d)` is an exact distance and every cancelled candidate is `None`.
pub fn batch_distance_cancellable<S: AsRef<str>>(
    candidates: &[S],
    reference: &str,
    cancel: &AtomicBool,
) -> Vec<Option<usize>> {
    batch_distance_cancellable_in(Unit::Char, candidates, reference, cancel)
}

/// [`batch_distance_cancellable`] in an explicit unit.
pub fn batch_distance_cancellable_in<S: AsRef<str>>(
    unit: Unit,
    candidates: &[S],
    reference: &str,
    cancel: &AtomicBool,
) -> Vec<Option<usize>> {
    let prepared = PreparedReference::new(unit, reference);

    let results: Vec<Option<usize>> = candidates
        .iter()
        .map(|candidate| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            Some(prepared.distance_to(candidate.as_ref()))
        })
        .collect();

    let done = results.iter().filter(|d| d.is_some()).count();
    if done < candidates.len() {
        debug!(done, total = candidates.len(), "batch cancelled");
    }

    check_batch_aligned(candidates.len(), results.len());
    results
}

/// [`batch_distance_cancellable`] under `config`.
///
/// Lengths are checked for the reference and every candidate before any
/// distance is computed, so an over-long input fails the batch even if it would
/// have been cancelled. Always sequential; `config.parallel` is ignored.
pub fn batch_distance_cancellable_with<S: AsRef<str>>(
    candidates: &[S],
    reference: &str,
    config: &DistanceConfig,
    cancel: &AtomicBool,
) -> Result<Vec<Option<usize>>> {
    config.check_len(reference)?;
    for (index, candidate) in candidates.iter().enumerate() {
        config
            .check_len(candidate.as_ref())
            .map_err(|source| DistanceError::Candidate {
                index,
                source: Box::new(source),
            })?;
    }
    Ok(batch_distance_cancellable_in(config.unit, candidates, reference, cancel))
}
