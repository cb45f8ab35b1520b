// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufRead, BufWriter};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use levbatch::demo::{DEMO_CANDIDATES, DEMO_REFERENCE};
use levbatch::{
    batch_distance_with, distance_matrix_with_progress, distance_with, normalize_batch,
    normalized_distance_in, read_column, write_pairs_csv, DistanceConfig,
};

mod cli;
use cli::display::{self, DIM, RESET};
use cli::{Cli, Commands};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

/// Distances at or below this are highlighted as near matches.
const NEAR: usize = 2;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.global.log_level())),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli
        .global
        .apply(DistanceConfig::from_env().context("Invalid LEVBATCH_* environment")?);
    info!(unit = %config.unit, max_len = ?config.max_len, parallel = config.parallel, "configured");

    match cli.command {
        Commands::Compare { a, b, normalize } => run_compare(&a, &b, normalize, &config),
        Commands::Batch {
            reference,
            mut candidates,
            stdin,
            normalize,
            json,
        } => {
            if stdin {
                for line in io::stdin().lock().lines() {
                    candidates.push(line.context("Failed to read candidates from stdin")?);
                }
            }
            run_batch(&reference, &candidates, normalize, json, &config)
        }
        Commands::Matrix {
            source,
            target,
            output,
            pairs,
            threshold,
            column,
        } => run_matrix(
            &source,
            target.as_deref(),
            &output,
            pairs.as_deref(),
            threshold,
            &column,
            &config,
        ),
        Commands::Demo => run_demo(&config),
    }
}

fn run_compare(a: &str, b: &str, normalize: bool, config: &DistanceConfig) -> Result<()> {
    let d = distance_with(a, b, config)?;
    println!("distance: {}", d);
    if normalize {
        println!("normalized: {}", normalized_distance_in(config.unit, a, b));
    }
    Ok(())
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    candidate: &'a str,
    distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<f64>,
}

fn run_batch(
    reference: &str,
    candidates: &[String],
    normalize: bool,
    json: bool,
    config: &DistanceConfig,
) -> Result<()> {
    let results = batch_distance_with(candidates, reference, config)?;
    let normalized = normalize.then(|| normalize_batch(config.unit, candidates, reference, &results));
    let normalized_at = |i: usize| normalized.as_ref().map(|n| n[i]);

    if json {
        let entries: Vec<BatchEntry<'_>> = candidates
            .iter()
            .zip(&results)
            .enumerate()
            .map(|(i, (candidate, &distance))| BatchEntry {
                candidate,
                distance,
                normalized: normalized_at(i),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (i, &d) in results.iter().enumerate() {
            match normalized_at(i) {
                Some(n) => println!("distance is {}, normalized {}", display::distance_colored(d, NEAR), n),
                None => println!("distance is {}", display::distance_colored(d, NEAR)),
            }
        }
    }
    Ok(())
}

/// Separate calls, then one batch call, over the fixed demonstration set.
fn run_demo(config: &DistanceConfig) -> Result<()> {
    println!("separate call");
    for candidate in DEMO_CANDIDATES {
        let d = distance_with(candidate, DEMO_REFERENCE, config)?;
        println!("distance is {}", d);
    }

    println!("batch call");
    for d in batch_distance_with(&DEMO_CANDIDATES, DEMO_REFERENCE, config)? {
        println!("distance is {}", d);
    }
    Ok(())
}

fn read_strings(path: &Path, column: &str) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_column(file, column).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

fn run_matrix(
    source: &Path,
    target: Option<&Path>,
    output: &Path,
    pairs_path: Option<&Path>,
    threshold: usize,
    column: &str,
    config: &DistanceConfig,
) -> Result<()> {
    let start = Instant::now();

    let sources = read_strings(source, column)?;
    // Without a target file, compare the sources against themselves
    let targets = match target {
        Some(path) => read_strings(path, column)?,
        None => sources.clone(),
    };
    info!(sources = sources.len(), targets = targets.len(), "loaded inputs");

    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Comparing");
        pb.set_message("rows...");
        pb
    };

    #[cfg(feature = "parallel")]
    let on_row = || progress.inc(1);
    #[cfg(not(feature = "parallel"))]
    let on_row = || {};

    let matrix = distance_matrix_with_progress(&sources, &targets, config, on_row)?;

    #[cfg(feature = "parallel")]
    progress.finish_with_message(format!("compared {} rows", matrix.rows.len()));

    let out = File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    matrix.write_csv(BufWriter::new(out), Some(threshold))?;

    let pair_count = match pairs_path {
        Some(path) => {
            let pairs = matrix.pairs(Some(threshold));
            let out = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            write_pairs_csv(BufWriter::new(out), &pairs)?;
            Some(pairs.len())
        }
        None => None,
    };

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let label = |text: &str| {
        if display::use_colors() {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    display::section_top("MATRIX");
    display::row(&format!(" {} {}", label("sources:"), sources.len()));
    display::row(&format!(" {} {}", label("targets:"), targets.len()));
    display::row(&format!(" {} {}", label("unit:   "), config.unit));
    if threshold > 0 {
        display::row(&format!(" {} {}", label("keep ≤: "), threshold));
    }
    display::row(&format!(
        " {} {}",
        label("output: "),
        display::truncate(&output.display().to_string(), 48)
    ));
    if let Some(count) = pair_count {
        display::row(&format!(" {} {}", label("pairs:  "), count));
    }
    display::row(&format!(" {} {}", label("time:   "), display::timing_ms(elapsed_ms)));
    display::section_bot();

    Ok(())
}
