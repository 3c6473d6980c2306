//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--label` / `-l <LABEL>`: Keep only tags whose name contains LABEL (repeatable)
//! - `--format <json|text>`: Output format
//! - `--thumbnail`: Also report thumbnail fields
//! - `--config <PATH>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::OutputFormat;

/// picmeta - Return metadata for photos
#[derive(Parser, Debug)]
#[command(name = "picmeta")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Everything the files carry
    picmeta photo.jpg

    # Only date and camera fields, for a batch of photos
    picmeta -l Date -l Model *.jpg

    # Human-readable output
    picmeta --format text -l GPS photo.jpg

Labels are case-sensitive substrings: 'Date' matches DateTime and
DateTimeOriginal, 'date' matches neither.")]
pub struct Cli {
    /// Only show metadata if the tag name contains this label
    #[arg(short = 'l', long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Output format [default: json, or the config file's setting]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also report fields of the embedded thumbnail
    #[arg(long)]
    pub thumbnail: bool,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Files to process
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
