// SPDX-License-Identifier: MPL-2.0
//! Mirror compositor.
//!
//! Splits an image at its horizontal midpoint and builds two symmetric
//! composites: the left half followed by its mirror, and the mirrored right
//! half followed by the right half. The seam order differs between the two
//! composites and must stay that way.

use crate::media::image_transform::{crop_columns, flip_horizontal, side_by_side};
use image_rs::{DynamicImage, GenericImageView};

/// The two halves of an image split at `width / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Halves {
    pub left: DynamicImage,
    pub right: DynamicImage,
}

/// The pair of mirror composites derived from one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Composites {
    /// Left half, then its mirror.
    pub left: DynamicImage,
    /// Mirror of the right half, then the right half.
    pub right: DynamicImage,
}

/// Splits `image` at the integer midpoint; odd widths give the right half
/// the extra column.
#[must_use]
pub fn split_halves(image: &DynamicImage) -> Halves {
    let (width, _) = image.dimensions();
    let mid = width / 2;
    Halves {
        left: crop_columns(image, 0, mid),
        right: crop_columns(image, mid, width),
    }
}

/// Builds both mirror composites from `image`.
#[must_use]
pub fn build_composites(image: &DynamicImage) -> Composites {
    let halves = split_halves(image);
    let left_mirror = flip_horizontal(&halves.left);
    let right_mirror = flip_horizontal(&halves.right);

    Composites {
        left: side_by_side(&halves.left, &left_mirror),
        right: side_by_side(&right_mirror, &halves.right),
    }
}
