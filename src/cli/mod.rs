// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levbatch command-line interface.
//!
//! Four subcommands: `compare` for one pair, `batch` for one reference against
//! many candidates, `matrix` for a CSV cross product, and `demo` for the fixed
//! demonstration set. Global flags override the `LEVBATCH_*` environment.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use levbatch::{DistanceConfig, Unit, DEFAULT_COLUMN, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "levbatch",
    about = "Levenshtein edit distance for pairs, batches and matrices",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Compare by Unicode scalar values ("char") or UTF-8 bytes ("byte")
    #[arg(long, global = true)]
    pub unit: Option<Unit>,

    /// Reject inputs longer than this many units
    #[arg(long, global = true)]
    pub max_len: Option<usize>,

    /// Run batches on the current thread only
    #[arg(long, global = true)]
    pub sequential: bool,
}

impl GlobalArgs {
    /// Layer command-line flags over an environment-derived config.
    pub fn apply(&self, mut config: DistanceConfig) -> DistanceConfig {
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if self.max_len.is_some() {
            config.max_len = self.max_len;
        }
        if self.sequential {
            config.parallel = false;
        }
        config
    }

    /// Default filter directive when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Distance between two strings
    Compare {
        a: String,
        b: String,

        /// Also print the distance divided by the longer length
        #[arg(short, long)]
        normalize: bool,
    },

    /// Distance from each candidate to one reference string
    Batch {
        /// String every candidate is compared against
        #[arg(short, long)]
        reference: String,

        /// Candidate strings (also read from stdin with --stdin)
        candidates: Vec<String>,

        /// Read additional candidates from stdin, one per line
        #[arg(long)]
        stdin: bool,

        /// Also report each distance divided by the longer length
        #[arg(short, long)]
        normalize: bool,

        /// Emit a JSON array of {candidate, distance} objects
        #[arg(long)]
        json: bool,
    },

    /// Source × target distance matrix from CSV columns
    Matrix {
        /// CSV file with the source strings
        #[arg(short, long)]
        source: PathBuf,

        /// CSV file with the target strings (defaults to the source file)
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Where to write the matrix CSV
        #[arg(short, long)]
        output: PathBuf,

        /// Also write matching pairs as source,target,distance
        #[arg(long)]
        pairs: Option<PathBuf>,

        /// Blank out cells (and drop pairs) with a larger distance; 0 keeps everything
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Column holding the strings in both CSV files
        #[arg(long, default_value = DEFAULT_COLUMN)]
        column: String,
    },

    /// Print distances for the built-in demonstration set
    Demo,
}
