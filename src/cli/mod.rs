//! cli
//!
//! Command-line interface layer for picmeta.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Load configuration and merge it with the flags
//! - Install the logger
//! - Print the rendered report
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands the
//! resolved options to [`extract()`], which drives [`crate::core::filter`].

pub mod args;
pub mod extract;

pub use args::Cli;
pub use extract::{extract, ExtractOptions};

use std::collections::HashSet;

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let config = Config::load(cli.config.as_deref())?;
    if let Some(path) = config.loaded_from() {
        log::debug!("using config {}", path.display());
    }

    let opts = ExtractOptions::resolve(&cli, &config);

    let mut seen = HashSet::new();
    for path in &opts.files {
        if !seen.insert(path) {
            output::warn(
                format!("'{}' given more than once; reported once", path.display()),
                verbosity,
            );
        }
    }

    let rendered = extract(&opts)?;
    println!("{}", rendered);

    Ok(())
}

/// Install `env_logger` at the level matching `verbosity`.
///
/// `RUST_LOG`, when set, takes precedence.
fn init_logging(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(verbosity.log_level())
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
