//! picmeta - Filtered EXIF metadata for batches of photos
//!
//! picmeta reads the embedded metadata of image files and returns only the
//! tags whose names contain one of the caller's labels.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, renders the report)
//! - [`core`] - Domain types, label filtering, configuration
//! - [`source`] - Metadata source capability and its EXIF implementation
//! - [`ui`] - Output formatting and diagnostics
//!
//! # Example
//!
//! ```
//! use picmeta::core::filter::get_metadata;
//! use picmeta::core::types::TagValue;
//! use picmeta::source::mock::{MockFactory, MockFile};
//!
//! let factory = MockFactory::new()
//!     .with_file("abc.jpg", [("DateTime", "2020:01:01 10:00:00"), ("Make", "Canon")]);
//!
//! let report = get_metadata(&factory, &[MockFile::new("abc.jpg")], &["Date"]).unwrap();
//! assert_eq!(report["abc.jpg"].len(), 1);
//! assert_eq!(report["abc.jpg"]["DateTime"], TagValue::from("2020:01:01 10:00:00"));
//! ```

pub mod cli;
pub mod core;
pub mod source;
pub mod ui;
