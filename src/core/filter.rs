//! core::filter
//!
//! Label filtering and per-file metadata extraction.
//!
//! # Matching
//!
//! A tag name is kept when any label occurs in it as a contiguous,
//! case-sensitive substring. An empty label set keeps everything. An empty
//! tag name is never kept.
//!
//! # Extraction
//!
//! [`get_metadata`] validates its arguments before touching any file, then
//! walks the files in input order. For each one it builds a source, keeps
//! the matching tag names, and looks their values up. The first error
//! aborts the whole call: there are no partial reports.
//!
//! # Example
//!
//! ```
//! use picmeta::core::filter::matches;
//!
//! assert!(matches("DateTimeOriginal", &["Date"]).unwrap());
//! assert!(!matches("DateTimeOriginal", &["date"]).unwrap());
//! assert!(matches("Make", &[] as &[&str]).unwrap());
//! assert!(matches("Make", &["Make", ""]).is_err());
//! ```

use thiserror::Error;

use crate::core::types::{Label, MetadataRecord, MetadataReport, TypeError};
use crate::source::{FileHandle, MetadataSource, SourceError, SourceFactory};

/// Errors from filtering operations.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A precondition on the arguments failed. Raised before any file is read.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file handle could not be turned into a metadata source.
    #[error("cannot read metadata from '{file}'")]
    SourceConstruction {
        /// Identifier of the failing file
        file: String,
        /// What the source reported
        #[source]
        source: SourceError,
    },

    /// A tag that the source enumerated could not be looked up.
    #[error("tag '{tag}' is listed but missing in '{file}'")]
    KeyNotFound {
        /// Identifier of the file
        file: String,
        /// The tag name
        tag: String,
    },
}

impl From<TypeError> for FilterError {
    fn from(err: TypeError) -> Self {
        FilterError::InvalidArgument(err.to_string())
    }
}

/// Decide whether a tag name passes the filters.
///
/// Returns `false` for an empty name, `true` for an empty filter set, and
/// otherwise whether any filter is a substring of `name`.
///
/// # Errors
///
/// Returns `FilterError::InvalidArgument` if any filter is the empty
/// string. All filters are checked before matching starts.
pub fn matches<S: AsRef<str>>(name: &str, filters: &[S]) -> Result<bool, FilterError> {
    if name.is_empty() {
        return Ok(false);
    }

    if filters.is_empty() {
        return Ok(true);
    }

    if filters.iter().any(|f| f.as_ref().is_empty()) {
        return Err(FilterError::InvalidArgument(
            "filters must not contain empty strings".to_string(),
        ));
    }

    Ok(filters.iter().any(|f| name.contains(f.as_ref())))
}

/// Check every label up front.
///
/// # Errors
///
/// Returns `FilterError::InvalidArgument` if any label is empty or
/// whitespace-only.
pub fn validate_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Label>, FilterError> {
    labels
        .iter()
        .map(|l| Label::new(l.as_ref()).map_err(FilterError::from))
        .collect()
}

/// Extract the matching metadata of every file.
///
/// The report is keyed by [`FileHandle::identifier`]. A file whose tags
/// all miss the filters still gets an (empty) record.
///
/// # Errors
///
/// - `InvalidArgument` if a label is blank or `files` is empty
/// - `SourceConstruction` if the factory cannot open a file
/// - `KeyNotFound` if a source enumerates a tag it cannot look up
pub fn get_metadata<H, F, S>(
    factory: &F,
    files: &[H],
    labels: &[S],
) -> Result<MetadataReport, FilterError>
where
    H: FileHandle,
    F: SourceFactory<H>,
    S: AsRef<str>,
{
    let labels = validate_labels(labels)?;

    if files.is_empty() {
        return Err(FilterError::InvalidArgument(
            "must have one or more files to parse".to_string(),
        ));
    }

    let mut report = MetadataReport::new();
    for file in files {
        let id = file.identifier();
        log::debug!("reading metadata from {}", id);

        let source = factory
            .open(file)
            .map_err(|source| FilterError::SourceConstruction {
                file: id.to_string(),
                source,
            })?;
        let record = extract_record(id, &source, &labels)?;

        log::debug!("{}: kept {} tag(s)", id, record.len());
        report.insert(id.to_string(), record);
    }

    Ok(report)
}

/// Collect the matching tags of one source.
fn extract_record<M: MetadataSource + ?Sized>(
    id: &str,
    source: &M,
    labels: &[Label],
) -> Result<MetadataRecord, FilterError> {
    let mut record = MetadataRecord::new();
    for tag in source.tags() {
        if !matches(&tag, labels)? {
            continue;
        }
        let value = source.lookup(&tag).map_err(|err| match err {
            SourceError::KeyNotFound(tag) => FilterError::KeyNotFound {
                file: id.to_string(),
                tag,
            },
            other => FilterError::SourceConstruction {
                file: id.to_string(),
                source: other,
            },
        })?;
        record.insert(tag, value);
    }
    Ok(record)
}
