//! source::traits
//!
//! The metadata source capability.
//!
//! # Design
//!
//! Decoding lives behind three small traits so the filtering core never
//! touches bytes:
//!
//! - [`FileHandle`] names an input. The name becomes the report key.
//! - [`SourceFactory`] turns a handle into a parsed source.
//! - [`MetadataSource`] enumerates tag names and looks values up by name.
//!
//! Handles are only borrowed. Opening and closing the underlying resource
//! is the caller's job.

use thiserror::Error;

use crate::core::types::TagValue;

/// Errors from metadata sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The handle's content could not be interpreted as a metadata container.
    #[error("{0}")]
    Construction(String),

    /// The decoder rejected the container.
    #[error("{0}")]
    Decode(String),

    /// A lookup named a tag the source does not expose.
    #[error("tag not found: {0}")]
    KeyNotFound(String),
}

/// An opened input with a stable identifier.
pub trait FileHandle {
    /// Identifier used as the key in the metadata report.
    fn identifier(&self) -> &str;
}

/// Parsed metadata for one input.
pub trait MetadataSource {
    /// All tag names currently available. No duplicates.
    fn tags(&self) -> Vec<String>;

    /// Value of the named tag.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::KeyNotFound` if `tag` is not one of [`tags`](Self::tags).
    fn lookup(&self, tag: &str) -> Result<TagValue, SourceError>;
}

/// Builds a [`MetadataSource`] from a handle.
pub trait SourceFactory<H: ?Sized> {
    /// The source type produced.
    type Source: MetadataSource;

    /// Parse the handle's metadata container.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a supported container.
    fn open(&self, handle: &H) -> Result<Self::Source, SourceError>;
}
