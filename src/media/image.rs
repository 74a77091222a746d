// SPDX-License-Identifier: MPL-2.0
//! Image loading and GPU handle packaging.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// Pixel data packaged for display by Iced.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Converts a decoded image into a display handle.
    #[must_use]
    pub fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let (width, height) = dynamic.dimensions();
        Self::from_rgba(width, height, dynamic.to_rgba8().into_vec())
    }
}

/// Load and decode an image from the given path.
///
/// The result is normalized to RGBA8 so every later stage works on a
/// single pixel format.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a supported image ([`Error::Decode`])
/// - The image has a zero dimension ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    Ok(DynamicImage::ImageRgba8(img.to_rgba8()))
}
