/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! File opening that reports failures as [`FileError`]
//!
//! The filename carried by the failure is `path.to_string_lossy()`. For a
//! path that is valid UTF-8 this is the path exactly as given. Bytes that
//! are not valid UTF-8 are replaced with U+FFFD, so such a filename no
//! longer matches the path byte for byte.

use crate::errors::{FileError, Result};
use crate::propagation::raise_with;
use std::fs::File;
use std::io;
use std::path::Path;

fn file_failure<T>(path: &Path, err: io::Error) -> Result<T> {
    log::debug!("cannot access {}: {}", path.display(), err);
    raise_with(|| FileError::new(path.to_string_lossy()).into())
}

/// Open `path` for reading
///
/// Raises [`FileError`] naming `path` (lossy for non UTF-8 paths).
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).or_else(|err| file_failure(path, err))
}

/// Create or truncate `path` for writing
///
/// Raises [`FileError`] naming `path` (lossy for non UTF-8 paths).
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::create(path).or_else(|err| file_failure(path, err))
}
