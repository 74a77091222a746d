// SPDX-License-Identifier: MPL-2.0
//! Fit-to-box placement of images inside drawing surfaces.
//!
//! An image is scaled uniformly to 90% of the largest size that fits the
//! surface, then centred on the surface centre shifted by the translation
//! offset.

use crate::domain::transform::TranslationOffset;
use crate::media::image::ImageData;
use crate::media::image_transform;
use iced::{Point, Rectangle, Size};
use image_rs::DynamicImage;

/// Fraction of the fitting size actually used, leaving a margin around the image.
pub const FIT_MARGIN: f32 = 0.9;

/// Returns the uniform scale that fits `image` into `surface` with the margin.
///
/// `None` when either extent is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_scale(surface: Size, image: (u32, u32)) -> Option<f32> {
    let (image_width, image_height) = image;
    if !has_extent(surface) || image_width == 0 || image_height == 0 {
        return None;
    }
    let scale_x = surface.width / image_width as f32;
    let scale_y = surface.height / image_height as f32;
    Some(scale_x.min(scale_y) * FIT_MARGIN)
}

/// Where and how large an image is drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner in surface coordinates.
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Fits `image` into `surface` and centres it, shifted by `offset`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn compute(surface: Size, image: (u32, u32), offset: TranslationOffset) -> Option<Self> {
        let scale = fit_scale(surface, image)?;
        let displayed = |dim: u32| ((dim as f32 * scale).floor() as u32).max(1);
        Some(Self::centered(
            surface,
            (displayed(image.0), displayed(image.1)),
            offset,
        ))
    }

    /// Centres an already-sized image on `surface`, shifted by `offset`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centered(surface: Size, size: (u32, u32), offset: TranslationOffset) -> Self {
        let (width, height) = size;
        let centre_x = surface.width / 2.0 + offset.x as f32;
        let centre_y = surface.height / 2.0 + offset.y as f32;
        Self {
            origin: Point::new(
                centre_x - width as f32 / 2.0,
                centre_y - height as f32 / 2.0,
            ),
            width,
            height,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.origin,
            Size::new(self.width as f32, self.height as f32),
        )
    }
}

/// Resamples `image` to its fitted size on `surface` for display.
///
/// `None` when the surface has not been laid out yet.
#[must_use]
pub fn render_preview(image: &DynamicImage, surface: Size) -> Option<ImageData> {
    let placement = Placement::compute(
        surface,
        (image.width(), image.height()),
        TranslationOffset::default(),
    )?;
    let preview = image_transform::resize(image, placement.width, placement.height);
    Some(ImageData::from_dynamic(&preview))
}

/// True when both sides of `size` are strictly positive.
#[must_use]
pub fn has_extent(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
