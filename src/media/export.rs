// SPDX-License-Identifier: MPL-2.0
//! Combined composite export.
//!
//! Both composites are placed side by side into one RGB image and written
//! with the format the `image` crate infers from the destination extension.

use crate::media::image_transform::side_by_side;
use image_rs::{DynamicImage, ImageError, ImageFormat};
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension appended when the destination has none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Why an export could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The destination extension maps to no writable format.
    UnsupportedFormat(String),
    /// The file could not be created or written.
    Io(String),
    /// The encoder rejected the image.
    Encoding(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::UnsupportedFormat(ext) => {
                write!(f, "unsupported export format: {ext}")
            }
            ExportError::Io(msg) => write!(f, "could not write file: {msg}"),
            ExportError::Encoding(msg) => write!(f, "could not encode image: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<ImageError> for ExportError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => ExportError::Io(io.to_string()),
            ImageError::Unsupported(e) => ExportError::UnsupportedFormat(e.to_string()),
            other => ExportError::Encoding(other.to_string()),
        }
    }
}

/// Places `left` at x=0 and `right` directly after it, top-aligned.
#[must_use]
pub fn combine(left: &DynamicImage, right: &DynamicImage) -> DynamicImage {
    side_by_side(left, right)
}

/// Returns `destination` with `.png` appended when it has no extension.
#[must_use]
pub fn resolve_destination(destination: &Path) -> PathBuf {
    if destination.extension().is_some() {
        destination.to_path_buf()
    } else {
        let mut path = destination.as_os_str().to_owned();
        path.push(".");
        path.push(DEFAULT_EXTENSION);
        PathBuf::from(path)
    }
}

/// Combines both composites and writes them to `destination`.
///
/// The inputs are only read. On success the final path (with any appended
/// extension) is returned.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] when the extension is unknown or
/// has no encoder, [`ExportError::Io`] when the file cannot be written, and
/// [`ExportError::Encoding`] when the encoder fails.
pub fn combine_and_write(
    left: &DynamicImage,
    right: &DynamicImage,
    destination: &Path,
) -> Result<PathBuf, ExportError> {
    let path = resolve_destination(destination);

    let format = ImageFormat::from_path(&path).map_err(|_| {
        ExportError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;
    if !format.writing_enabled() {
        return Err(ExportError::UnsupportedFormat(format!("{format:?}")));
    }

    let combined = combine(left, right);
    combined.save_with_format(&path, format)?;

    Ok(path)
}
