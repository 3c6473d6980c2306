//! source::file
//!
//! Image files opened from the filesystem.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::FileHandle;

/// An image file opened for binary read.
///
/// The identifier is the path exactly as it was given, so report keys
/// line up with what the user typed on the command line.
#[derive(Debug)]
pub struct ImageFile {
    name: String,
    path: PathBuf,
    file: File,
}

impl ImageFile {
    /// Open a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an I/O error naming `path` if the file cannot be opened. The
    /// error kind is the one reported by the operating system.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot open '{}': {}", path.display(), e))
        })?;
        Ok(Self {
            name: path.display().to_string(),
            path: path.to_path_buf(),
            file,
        })
    }

    /// The path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the open file.
    ///
    /// `&File` implements `Read` and `Seek`, so readers can be built from a
    /// shared borrow without taking ownership.
    pub fn file(&self) -> &File {
        &self.file
    }
}

impl FileHandle for ImageFile {
    fn identifier(&self) -> &str {
        &self.name
    }
}
