//! core
//!
//! Core domain types and operations for picmeta.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Label, TagValue, report maps
//! - [`filter`] - Label matching and per-file metadata extraction
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Arguments are checked before any file is read
//! - Extraction is a pure function of its inputs and the sources' state
//! - The first error aborts the call

pub mod config;
pub mod filter;
pub mod types;
