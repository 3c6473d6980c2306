//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Diagnostics on stderr and verbosity handling
//! - [`render`] - Report formatting (JSON and text)
//!
//! # Design
//!
//! The UI module provides a consistent interface for output. Reports are
//! rendered to a string first and printed in one go, so a failed call
//! never leaves a partial report on stdout.

pub mod output;
pub mod render;
