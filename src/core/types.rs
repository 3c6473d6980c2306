//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Label`] - Validated label filter (substring matched against tag names)
//! - [`TagValue`] - Printable value of a single metadata field
//! - [`MetadataRecord`] - Matched tag names to values, for one file
//! - [`MetadataReport`] - File identifier to metadata record
//!
//! # Validation
//!
//! Labels enforce validity at construction time. A blank label cannot be
//! represented, so a filter set built from `Label`s never needs rechecking.
//!
//! # Examples
//!
//! ```
//! use picmeta::core::types::{Label, TagValue};
//!
//! let label = Label::new("Date").unwrap();
//! assert_eq!(label.as_str(), "Date");
//!
//! // Blank labels fail at creation time
//! assert!(Label::new("").is_err());
//! assert!(Label::new("   ").is_err());
//!
//! assert_eq!(TagValue::from("Canon").to_string(), "Canon");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("labels cannot be empty")]
    EmptyLabel,
}

/// A validated label filter.
///
/// Labels are matched against tag names as case-sensitive substrings.
/// A label must contain at least one non-whitespace character. The
/// original text is kept as supplied: surrounding whitespace is part of
/// the substring that gets matched.
///
/// # Example
///
/// ```
/// use picmeta::core::types::Label;
///
/// let label = Label::new(" Make").unwrap();
/// assert_eq!(label.as_str(), " Make");
///
/// assert!(Label::new("\t\n").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Create a new validated label.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::EmptyLabel` if the label is empty or whitespace-only.
    pub fn new(label: impl Into<String>) -> Result<Self, TypeError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(TypeError::EmptyLabel);
        }
        Ok(Self(label))
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value of one metadata field.
///
/// Serialized untagged, so JSON output carries plain scalars and arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Unsigned integer (BYTE, SHORT, LONG)
    Unsigned(u64),
    /// Signed integer (SBYTE, SSHORT, SLONG)
    Signed(i64),
    /// Floating point (RATIONAL, SRATIONAL, FLOAT, DOUBLE)
    Float(f64),
    /// Text (ASCII, or the display form of anything else)
    Text(String),
    /// Multi-valued field
    List(Vec<TagValue>),
}

impl TagValue {
    /// Collapse a list of values: a single element becomes a scalar.
    pub fn from_values(mut values: Vec<TagValue>) -> Self {
        if values.len() == 1 {
            values.remove(0)
        } else {
            TagValue::List(values)
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<u64> for TagValue {
    fn from(v: u64) -> Self {
        TagValue::Unsigned(v)
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        TagValue::Signed(v)
    }
}

impl From<f64> for TagValue {
    fn from(v: f64) -> Self {
        TagValue::Float(v)
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Unsigned(v) => write!(f, "{}", v),
            TagValue::Signed(v) => write!(f, "{}", v),
            TagValue::Float(v) => write!(f, "{}", v),
            TagValue::Text(s) => write!(f, "{}", s),
            TagValue::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

/// Matched tag names and their values for a single file.
pub type MetadataRecord = BTreeMap<String, TagValue>;

/// Metadata records keyed by file identifier.
pub type MetadataReport = BTreeMap<String, MetadataRecord>;
