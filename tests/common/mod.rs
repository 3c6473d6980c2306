//! Shared fixtures for integration tests.
//!
//! Builds minimal little-endian TIFF files carrying real EXIF entries, so
//! tests exercise the actual decoder without binary fixtures in the repo.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// TIFF tag numbers used by the fixtures.
pub mod tag {
    pub const IMAGE_WIDTH: u16 = 0x0100;
    pub const MAKE: u16 = 0x010F;
    pub const MODEL: u16 = 0x0110;
    pub const X_RESOLUTION: u16 = 0x011A;
    pub const DATE_TIME: u16 = 0x0132;
}

const ASCII: u16 = 2;
const SHORT: u16 = 3;
const RATIONAL: u16 = 5;

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

/// Builder for a TIFF file with one or more IFDs.
///
/// Entries go into the current IFD. [`TiffBuilder::thumbnail`] starts IFD1.
pub struct TiffBuilder {
    ifds: Vec<Vec<Entry>>,
}

impl TiffBuilder {
    pub fn new() -> Self {
        Self {
            ifds: vec![Vec::new()],
        }
    }

    pub fn ascii(self, tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        self.push(Entry {
            tag,
            kind: ASCII,
            count: data.len() as u32,
            data,
        })
    }

    pub fn short(self, tag: u16, value: u16) -> Self {
        self.push(Entry {
            tag,
            kind: SHORT,
            count: 1,
            data: value.to_le_bytes().to_vec(),
        })
    }

    pub fn rational(self, tag: u16, num: u32, denom: u32) -> Self {
        let mut data = num.to_le_bytes().to_vec();
        data.extend_from_slice(&denom.to_le_bytes());
        self.push(Entry {
            tag,
            kind: RATIONAL,
            count: 1,
            data,
        })
    }

    /// Start the thumbnail IFD.
    pub fn thumbnail(mut self) -> Self {
        self.ifds.push(Vec::new());
        self
    }

    fn push(mut self, entry: Entry) -> Self {
        self.ifds
            .last_mut()
            .expect("builder always has an IFD")
            .push(entry);
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"II");
        out.extend_from_slice(&42u16.to_le_bytes());
        out.extend_from_slice(&8u32.to_le_bytes());

        let ifd_count = self.ifds.len();
        for (i, entries) in self.ifds.iter_mut().enumerate() {
            entries.sort_by_key(|e| e.tag);

            let ifd_start = out.len();
            let table_len = 2 + 12 * entries.len() + 4;
            let mut table = Vec::with_capacity(table_len);
            let mut data = Vec::new();

            table.extend_from_slice(&(entries.len() as u16).to_le_bytes());
            for entry in entries.iter() {
                table.extend_from_slice(&entry.tag.to_le_bytes());
                table.extend_from_slice(&entry.kind.to_le_bytes());
                table.extend_from_slice(&entry.count.to_le_bytes());
                if entry.data.len() <= 4 {
                    let mut inline = entry.data.clone();
                    inline.resize(4, 0);
                    table.extend_from_slice(&inline);
                } else {
                    let offset = (ifd_start + table_len + data.len()) as u32;
                    table.extend_from_slice(&offset.to_le_bytes());
                    data.extend_from_slice(&entry.data);
                    if data.len() % 2 == 1 {
                        data.push(0);
                    }
                }
            }

            let next = if i + 1 < ifd_count {
                (ifd_start + table_len + data.len()) as u32
            } else {
                0
            };
            table.extend_from_slice(&next.to_le_bytes());

            out.extend_from_slice(&table);
            out.extend_from_slice(&data);
        }
        out
    }

    /// Build and write to `dir/name`.
    pub fn write(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).expect("failed to write fixture");
        path
    }
}

/// A camera photo: make, model, width and date.
pub fn camera_photo() -> TiffBuilder {
    TiffBuilder::new()
        .short(tag::IMAGE_WIDTH, 640)
        .ascii(tag::MAKE, "Canon")
        .ascii(tag::MODEL, "EOS 5D")
        .ascii(tag::DATE_TIME, "2020:06:01 12:30:00")
}

/// A phone photo: make, model and resolution.
pub fn phone_photo() -> TiffBuilder {
    TiffBuilder::new()
        .ascii(tag::MAKE, "Apple")
        .ascii(tag::MODEL, "iPhone X")
        .rational(tag::X_RESOLUTION, 72, 1)
}
