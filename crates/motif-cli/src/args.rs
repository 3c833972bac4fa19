//! Command-line argument definitions for the Motif CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, per-run overrides, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Motif pattern generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output HTML file
    #[arg(short, long, default_value = "patterns.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for reproducible output (overrides the configuration file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Document title (overrides the configuration file)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
