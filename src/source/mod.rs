//! source
//!
//! Abstraction over parsed image metadata.
//!
//! # Architecture
//!
//! The filtering core only sees the [`MetadataSource`] capability: a list
//! of tag names and lookup by name. Decoding bytes is delegated to a
//! [`SourceFactory`], which builds a source from a [`FileHandle`].
//!
//! # Modules
//!
//! - `traits`: Capability traits and [`SourceError`]
//! - `file`: [`ImageFile`], a file opened for binary read
//! - [`exif`]: Production source backed by `kamadak-exif`
//! - [`mock`]: In-memory source for deterministic testing
//!
//! # Example
//!
//! ```no_run
//! use picmeta::source::{ExifFactory, ImageFile, MetadataSource, SourceFactory};
//!
//! let image = ImageFile::open("photo.jpg")?;
//! let source = ExifFactory::new().open(&image)?;
//! for tag in source.tags() {
//!     println!("{}: {}", tag, source.lookup(&tag)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod exif;
mod file;
pub mod mock;
mod traits;

pub use self::exif::{ExifFactory, ExifSource};
pub use file::ImageFile;
pub use traits::*;
