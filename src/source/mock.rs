//! source::mock
//!
//! In-memory metadata source for deterministic testing.
//!
//! # Design
//!
//! The mock factory holds a tag table per file identifier. Opening a handle
//! whose identifier has no table fails the same way an unreadable image
//! does. Every open is recorded so tests can check how far a call got
//! before it aborted.
//!
//! # Example
//!
//! ```
//! use picmeta::core::filter::get_metadata;
//! use picmeta::source::mock::{MockFactory, MockFile};
//!
//! let factory = MockFactory::new()
//!     .with_file("abc.jpg", [("shared", "abc_shared"), ("abc_only", "abc only")]);
//!
//! let report = get_metadata(&factory, &[MockFile::new("abc.jpg")], &["abc"]).unwrap();
//! assert_eq!(report["abc.jpg"].len(), 1);
//! assert_eq!(factory.opened(), vec!["abc.jpg".to_string()]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use super::traits::{FileHandle, MetadataSource, SourceError, SourceFactory};
use crate::core::types::TagValue;

/// A handle that is nothing but a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFile {
    name: String,
}

impl MockFile {
    /// Create a handle with the given identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileHandle for MockFile {
    fn identifier(&self) -> &str {
        &self.name
    }
}

/// Mock factory for testing.
///
/// Clones share state via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockFactory {
    inner: Arc<Mutex<MockFactoryInner>>,
}

#[derive(Debug, Default)]
struct MockFactoryInner {
    /// Tag tables by file identifier.
    files: HashMap<String, BTreeMap<String, TagValue>>,
    /// Tags that enumerate but fail lookup, by file identifier.
    phantoms: HashMap<String, Vec<String>>,
    /// Identifiers passed to `open`, in call order.
    opened: Vec<String>,
}

impl MockFactory {
    /// Create an empty mock factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register tag values for a file identifier.
    pub fn with_file<K, V>(self, name: &str, tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<TagValue>,
    {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.files.insert(
                name.to_string(),
                tags.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            );
        }
        self
    }

    /// Make a file enumerate a tag that cannot be looked up.
    pub fn with_phantom_tag(self, name: &str, tag: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner
                .phantoms
                .entry(name.to_string())
                .or_default()
                .push(tag.to_string());
        }
        self
    }

    /// Identifiers opened so far, in call order.
    pub fn opened(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.opened.clone()
    }

    /// Clear the recorded opens.
    pub fn clear_opened(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.opened.clear();
    }
}

impl<H: FileHandle + ?Sized> SourceFactory<H> for MockFactory {
    type Source = MockSource;

    fn open(&self, handle: &H) -> Result<MockSource, SourceError> {
        let name = handle.identifier();
        let mut inner = self.inner.lock().unwrap();
        inner.opened.push(name.to_string());

        let values = inner.files.get(name).cloned().ok_or_else(|| {
            SourceError::Construction(format!("\"{}\" not found in mock data", name))
        })?;
        let phantoms = inner.phantoms.get(name).cloned().unwrap_or_default();

        Ok(MockSource { values, phantoms })
    }
}

/// A source built by [`MockFactory`].
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    values: BTreeMap<String, TagValue>,
    phantoms: Vec<String>,
}

impl MetadataSource for MockSource {
    fn tags(&self) -> Vec<String> {
        self.values
            .keys()
            .cloned()
            .chain(self.phantoms.iter().cloned())
            .collect()
    }

    fn lookup(&self, tag: &str) -> Result<TagValue, SourceError> {
        self.values
            .get(tag)
            .cloned()
            .ok_or_else(|| SourceError::KeyNotFound(tag.to_string()))
    }
}
