//! Command-line argument definitions for the survey processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the school commute survey processor
///
/// Converts a survey workbook with loosely labeled columns into normalized
/// student records plus a validation log for external reporting.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "survey-processor",
    version,
    about = "Convert school commute survey workbooks into normalized student records",
    long_about = "Processes one school commute survey workbook per run. Survey headers drift \
                  in wording and ordering across school years; the processor infers column \
                  meaning from marker vocabulary, extracts one record per student row, flags \
                  malformed values without aborting the batch, and optionally enriches raw \
                  addresses with canonical road-name lookups."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the survey processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a survey workbook and write records + validation log (default)
    Process(ProcessArgs),
    /// Extract and report validation issues without writing output files
    Check(CheckArgs),
}

/// Arguments for the process command (main conversion)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input survey workbook (.xlsx) containing the '학생' sheet
    #[arg(value_name = "SURVEY")]
    pub input: PathBuf,

    /// Output directory for generated files
    ///
    /// Will be created if it doesn't exist. Generated files are
    /// records.json and validation_log.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for generated files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Road-address lookup credential
    ///
    /// Falls back to the JUSO_API_KEY environment variable. Without a
    /// credential only rule-based address normalization is applied.
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Per-lookup timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Capacity of the lookup memoization cache
    #[arg(long = "cache-capacity", value_name = "N")]
    pub cache_capacity: Option<usize>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "Cannot use both --verbose and --quiet".to_string(),
            ));
        }

        Ok(())
    }
}

/// Arguments for the check command (validation only)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input survey workbook (.xlsx) containing the '학생' sheet
    #[arg(value_name = "SURVEY")]
    pub input: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CheckArgs {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "Cannot use both --verbose and --quiet".to_string(),
            ));
        }

        Ok(())
    }
}
