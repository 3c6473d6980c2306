//! cli::extract
//!
//! The extraction command handler.
//!
//! # Flow
//!
//! 1. Check labels (blank labels fail before any file is opened)
//! 2. Open every file for binary read
//! 3. Run the filter over the EXIF sources
//! 4. Render the whole report, or nothing on error

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::args::Cli;
use crate::core::config::{Config, OutputFormat};
use crate::core::filter::{get_metadata, validate_labels};
use crate::source::{ExifFactory, ImageFile};
use crate::ui::render;

/// Resolved options for one extraction.
///
/// Command-line values override config values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Label filters; empty matches everything
    pub labels: Vec<String>,
    /// Files to read, in order
    pub files: Vec<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Expose thumbnail fields
    pub include_thumbnail: bool,
}

impl ExtractOptions {
    /// Merge parsed arguments with loaded configuration.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let labels = if cli.labels.is_empty() {
            config.default_labels().to_vec()
        } else {
            cli.labels.clone()
        };

        Self {
            labels,
            files: cli.files.clone(),
            format: cli.format.unwrap_or_else(|| config.format()),
            include_thumbnail: cli.thumbnail || config.include_thumbnail(),
        }
    }
}

/// Extract and render metadata.
///
/// Returns the rendered report. Nothing is printed here.
pub fn extract(opts: &ExtractOptions) -> Result<String> {
    validate_labels(&opts.labels)?;

    let files = opts
        .files
        .iter()
        .map(ImageFile::open)
        .collect::<std::io::Result<Vec<_>>>()?;

    let factory = ExifFactory::new().with_thumbnail(opts.include_thumbnail);
    let report = get_metadata(&factory, &files, &opts.labels)?;

    render::render(&report, opts.format).context("failed to render report")
}
