// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source × target distance matrices.
//!
//! Each row is one batch run: every target against a single source. Rows are
//! independent, so with `parallel` set they are spread across the rayon pool and
//! each row runs sequentially inside its worker.
//!
//! CSV layout mirrors a spreadsheet of package names:
//!
//! ```text
//! pname,requests,request,urllib3
//! requests,0,1,
//! reqeusts,2,,
//! ```
//!
//! Cells above the threshold are left blank. A threshold of zero, like `None`,
//! keeps every cell. The pair format flattens the same data to
//! `source,target,distance` records.

use std::io::{Read, Write};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::batch::batch_distance_with;
use crate::config::DistanceConfig;
use crate::contracts::check_matrix_shape;
use crate::error::{DistanceError, Result};

/// Column read from input CSVs when none is given.
pub const DEFAULT_COLUMN: &str = "package name";

/// Threshold the CLI applies when none is given.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Header of the first matrix column.
const SOURCE_HEADER: &str = "pname";

/// Does a cell at distance `d` survive `threshold`? Zero disables filtering.
fn keeps(threshold: Option<usize>, d: usize) -> bool {
    match threshold {
        Some(t) if t > 0 => d <= t,
        _ => true,
    }
}

/// One `(source, target, distance)` cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistancePair {
    pub source: String,
    pub target: String,
    pub distance: usize,
}

/// Distances from every source to every target.
///
/// `rows[i][j]` is the distance between `sources[i]` and `targets[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    pub rows: Vec<Vec<usize>>,
}

impl DistanceMatrix {
    pub fn get(&self, source: usize, target: usize) -> Option<usize> {
        self.rows.get(source)?.get(target).copied()
    }

    /// Flatten to pairs in row-major order, keeping `distance <= threshold` when
    /// given and non-zero.
    pub fn pairs(&self, threshold: Option<usize>) -> Vec<DistancePair> {
        self.sources
            .iter()
            .zip(&self.rows)
            .flat_map(|(source, row)| {
                self.targets
                    .iter()
                    .zip(row)
                    .filter(move |(_, d)| keeps(threshold, **d))
                    .map(move |(target, &distance)| DistancePair {
                        source: source.clone(),
                        target: target.clone(),
                        distance,
                    })
            })
            .collect()
    }

    /// Write as `pname,<targets...>` with one row per source.
    pub fn write_csv<W: Write>(&self, writer: W, threshold: Option<usize>) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(std::iter::once(SOURCE_HEADER).chain(self.targets.iter().map(String::as_str)))?;

        for (source, row) in self.sources.iter().zip(&self.rows) {
            let cells = row
                .iter()
                .map(|&d| if keeps(threshold, d) { d.to_string() } else { String::new() });
            csv.write_record(std::iter::once(source.clone()).chain(cells))?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Distance matrix of `sources` × `targets`.
pub fn distance_matrix<S>(sources: &[S], targets: &[S], config: &DistanceConfig) -> Result<DistanceMatrix>
where
    S: AsRef<str> + Sync,
{
    distance_matrix_with_progress(sources, targets, config, || {})
}

/// [`distance_matrix`] calling `on_row` after each finished row.
///
/// `on_row` may be called from several threads at once.
pub fn distance_matrix_with_progress<S, F>(
    sources: &[S],
    targets: &[S],
    config: &DistanceConfig,
    on_row: F,
) -> Result<DistanceMatrix>
where
    S: AsRef<str> + Sync,
    F: Fn() + Sync,
{
    debug!(
        sources = sources.len(),
        targets = targets.len(),
        "building distance matrix"
    );

    // Parallelism is spent on rows; each row stays sequential.
    let row_config = config.clone().with_parallel(false);
    let row = |source: &S| -> Result<Vec<usize>> {
        let distances = batch_distance_with(targets, source.as_ref(), &row_config)?;
        on_row();
        Ok(distances)
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<usize>> = if config.parallel {
        sources.par_iter().map(row).collect::<Result<_>>()?
    } else {
        sources.iter().map(row).collect::<Result<_>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<usize>> = sources.iter().map(row).collect::<Result<_>>()?;

    check_matrix_shape(&rows, sources.len(), targets.len());

    Ok(DistanceMatrix {
        sources: sources.iter().map(|s| s.as_ref().to_string()).collect(),
        targets: targets.iter().map(|s| s.as_ref().to_string()).collect(),
        rows,
    })
}

/// Read every value of the named column from CSV with a header row.
pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut csv = csv::Reader::from_reader(reader);

    let position = csv
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| DistanceError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for record in csv.records() {
        let record = record?;
        values.push(record.get(position).unwrap_or_default().to_string());
    }
    Ok(values)
}

/// Write pairs as `source,target,distance` with a header row.
pub fn write_pairs_csv<W: Write>(writer: W, pairs: &[DistancePair]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if pairs.is_empty() {
        csv.write_record(["source", "target", "distance"])?;
    }
    for pair in pairs {
        csv.serialize(pair)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn names() -> Vec<String> {
        ["requests", "reqeusts", "urllib3"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_self_matrix_has_zero_diagonal() {
        let names = names();
        let matrix = distance_matrix(&names, &names, &DistanceConfig::default()).unwrap();
        for i in 0..names.len() {
            assert_eq!(matrix.get(i, i), Some(0));
        }
        assert_eq!(matrix.get(0, 1), Some(2));
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_rectangular_matrix() {
        let sources = vec!["abc".to_string()];
        let targets = vec!["abc".to_string(), "abd".to_string(), "".to_string()];
        let matrix = distance_matrix(&sources, &targets, &DistanceConfig::default()).unwrap();
        assert_eq!(matrix.rows, vec![vec![0, 1, 3]]);
    }

    #[test]
    fn test_progress_called_once_per_row() {
        let names = names();
        let rows = AtomicUsize::new(0);
        distance_matrix_with_progress(&names, &names, &DistanceConfig::default(), || {
            rows.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(rows.load(Ordering::Relaxed), names.len());
    }

    #[test]
    fn test_pairs_threshold() {
        let names = names();
        let matrix = distance_matrix(&names, &names, &DistanceConfig::default()).unwrap();

        assert_eq!(matrix.pairs(None).len(), 9);

        let close = matrix.pairs(Some(2));
        assert!(close.iter().all(|p| p.distance <= 2));
        assert!(close.contains(&DistancePair {
            source: "requests".into(),
            target: "reqeusts".into(),
            distance: 2,
        }));
        assert!(!close.iter().any(|p| p.target == "urllib3" && p.source != "urllib3"));
    }

    #[test]
    fn test_write_csv_blanks_cells_over_threshold() {
        let sources = vec!["abc".to_string(), "xyz".to_string()];
        let targets = vec!["abc".to_string(), "abd".to_string()];
        let matrix = distance_matrix(&sources, &targets, &DistanceConfig::default()).unwrap();

        let mut out = Vec::new();
        matrix.write_csv(&mut out, Some(1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "pname,abc,abd\nabc,0,1\nxyz,,\n");
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let names = vec!["flask".to_string(), "flasks".to_string()];
        let matrix = distance_matrix(&names, &names, &DistanceConfig::default()).unwrap();

        let mut out = Vec::new();
        matrix.write_csv(&mut out, Some(0)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pname,flask,flasks\nflask,0,1\nflasks,1,0\n"
        );
        assert_eq!(matrix.pairs(Some(0)), matrix.pairs(None));
    }

    #[test]
    fn test_read_column() {
        let input = "id,package name\n1,requests\n2,flask\n";
        let values = read_column(input.as_bytes(), DEFAULT_COLUMN).unwrap();
        assert_eq!(values, vec!["requests", "flask"]);
    }

    #[test]
    fn test_read_column_missing() {
        let input = "id,name\n1,requests\n";
        let err = read_column(input.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, DistanceError::MissingColumn(c) if c == DEFAULT_COLUMN));
    }

    #[test]
    fn test_write_pairs() {
        let pairs = vec![DistancePair {
            source: "a".into(),
            target: "b".into(),
            distance: 1,
        }];
        let mut out = Vec::new();
        write_pairs_csv(&mut out, &pairs).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "source,target,distance\na,b,1\n");

        let mut out = Vec::new();
        write_pairs_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "source,target,distance\n");
    }
}
