//! CLI logic for the Motif pattern generator.
//!
//! This module contains the run driver: it resolves configuration, applies
//! command-line overrides, and writes the generated document to disk.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use log::info;

use motif::{MotifError, PatternBuilder, config::AppConfig};

/// Resolve the configuration for a run: the loaded file (or defaults) with
/// the command-line seed and title applied on top.
///
/// # Errors
///
/// Returns `MotifError::Config` if a configuration file is missing or
/// malformed, and `MotifError::Range` if it holds an inverted range.
pub fn resolve_config(args: &Args) -> Result<AppConfig, MotifError> {
    let mut app_config = config::load_config(args.config.as_ref())?;

    if let Some(seed) = args.seed {
        app_config = app_config.with_seed(seed);
    }
    if let Some(title) = &args.title {
        app_config = app_config.with_title(title.as_str());
    }

    Ok(app_config)
}

/// Run the Motif CLI application
///
/// Generates the document described by the resolved configuration and
/// writes it to the output file.
///
/// # Errors
///
/// Returns `MotifError` for:
/// - Configuration loading errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), MotifError> {
    info!(output_path = args.output; "Generating patterns");

    let app_config = resolve_config(args)?;

    let builder = PatternBuilder::new(app_config);
    let mut sampler = builder.sampler();

    let mut sink = BufWriter::new(File::create(&args.output)?);
    builder.render(&mut sink, &mut sampler)?;
    sink.flush()?;

    info!(output_file = args.output; "Document exported successfully");

    Ok(())
}
