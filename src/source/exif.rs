//! source::exif
//!
//! EXIF metadata source backed by `kamadak-exif`.
//!
//! # Tag Names
//!
//! Tag names are the decoder's display names (`Make`, `DateTimeOriginal`,
//! `GPSLatitude`, ...). Fields from the primary image keep the bare name.
//! Thumbnail fields are only exposed on request and carry a `Thumbnail`
//! prefix (`ThumbnailXResolution`) so they never shadow primary fields.
//! If a name repeats, the first field wins.
//!
//! # Values
//!
//! | EXIF type | Value |
//! |-----------|-------|
//! | ASCII | text, multiple strings joined with `", "` |
//! | BYTE, SHORT, LONG | unsigned |
//! | SBYTE, SSHORT, SLONG | signed |
//! | RATIONAL, SRATIONAL, FLOAT, DOUBLE | float |
//! | UNDEFINED and anything else | decoder display text |
//!
//! Single-element fields collapse to a scalar.

use std::collections::BTreeMap;
use std::io::{BufReader, Seek};

use exif::{Field, In, Value};

use super::file::ImageFile;
use super::traits::{MetadataSource, SourceError, SourceFactory};
use crate::core::types::TagValue;

/// Prefix for tag names from the thumbnail IFD.
pub const THUMBNAIL_PREFIX: &str = "Thumbnail";

/// Builds [`ExifSource`]s from image files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifFactory {
    include_thumbnail: bool,
}

impl ExifFactory {
    /// Create a factory that exposes primary-image fields only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also expose thumbnail fields.
    pub fn with_thumbnail(mut self, include: bool) -> Self {
        self.include_thumbnail = include;
        self
    }
}

impl SourceFactory<ImageFile> for ExifFactory {
    type Source = ExifSource;

    fn open(&self, handle: &ImageFile) -> Result<ExifSource, SourceError> {
        // The handle may already have been read; always decode from the start.
        let mut file = handle.file();
        file.rewind().map_err(|e| SourceError::Decode(e.to_string()))?;
        let mut reader = BufReader::new(file);
        let exif = exif::Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(ExifSource::from_fields(exif.fields(), self.include_thumbnail))
    }
}

/// Decoded EXIF fields of one image.
#[derive(Debug, Clone, Default)]
pub struct ExifSource {
    fields: BTreeMap<String, TagValue>,
}

impl ExifSource {
    /// Build a source from decoded fields.
    pub fn from_fields<'a>(
        fields: impl IntoIterator<Item = &'a Field>,
        include_thumbnail: bool,
    ) -> Self {
        let mut map = BTreeMap::new();
        for field in fields {
            let name = if field.ifd_num == In::PRIMARY {
                field.tag.to_string()
            } else if include_thumbnail && field.ifd_num == In::THUMBNAIL {
                format!("{}{}", THUMBNAIL_PREFIX, field.tag)
            } else {
                continue;
            };
            map.entry(name).or_insert_with(|| convert(field));
        }
        Self { fields: map }
    }
}

impl MetadataSource for ExifSource {
    fn tags(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn lookup(&self, tag: &str) -> Result<TagValue, SourceError> {
        self.fields
            .get(tag)
            .cloned()
            .ok_or_else(|| SourceError::KeyNotFound(tag.to_string()))
    }
}

/// Convert a decoded field into a printable value.
fn convert(field: &Field) -> TagValue {
    match &field.value {
        Value::Ascii(strings) => TagValue::Text(
            strings
                .iter()
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Byte(v) => unsigned(v.iter().map(|&x| u64::from(x))),
        Value::Short(v) => unsigned(v.iter().map(|&x| u64::from(x))),
        Value::Long(v) => unsigned(v.iter().map(|&x| u64::from(x))),
        Value::SByte(v) => signed(v.iter().map(|&x| i64::from(x))),
        Value::SShort(v) => signed(v.iter().map(|&x| i64::from(x))),
        Value::SLong(v) => signed(v.iter().map(|&x| i64::from(x))),
        Value::Rational(v) => float(
            v.iter()
                .map(|r| (r.to_f64(), format!("{}/{}", r.num, r.denom))),
        ),
        Value::SRational(v) => float(
            v.iter()
                .map(|r| (r.to_f64(), format!("{}/{}", r.num, r.denom))),
        ),
        Value::Float(v) => float(v.iter().map(|&x| (f64::from(x), x.to_string()))),
        Value::Double(v) => float(v.iter().map(|&x| (x, x.to_string()))),
        _ => TagValue::Text(field.display_value().to_string()),
    }
}

fn unsigned(values: impl Iterator<Item = u64>) -> TagValue {
    TagValue::from_values(values.map(TagValue::Unsigned).collect())
}

fn signed(values: impl Iterator<Item = i64>) -> TagValue {
    TagValue::from_values(values.map(TagValue::Signed).collect())
}

// Non-finite values (zero denominators) fall back to text.
fn float(values: impl Iterator<Item = (f64, String)>) -> TagValue {
    TagValue::from_values(
        values
            .map(|(v, text)| {
                if v.is_finite() {
                    TagValue::Float(v)
                } else {
                    TagValue::Text(text)
                }
            })
            .collect(),
    )
}
