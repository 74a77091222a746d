// SPDX-License-Identifier: MPL-2.0
//! Geometry engine: rotation, uniform scale and shear applied as one
//! fixed-order pipeline to the untouched original image.
//!
//! Each step is skipped when its parameter is neutral, so a neutral
//! parameter set returns the original pixels unchanged. The output is always
//! derived from the original, never from a previous output, so repeated
//! parameter changes cannot accumulate resampling error.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::domain::transform::{RotationDegrees, ScaleFactor, SkewDegrees, TransformParameters};
use crate::media::image_transform;
use image_rs::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Fill used for pixels that map outside the source image.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Catmull-Rom coefficient used by the bicubic kernel.
const BICUBIC_A: f64 = -0.5;

/// Applies rotation, then scale, then shear to `original`.
///
/// Zero-sized inputs are returned unchanged.
#[must_use]
pub fn apply_transforms(original: &DynamicImage, params: &TransformParameters) -> DynamicImage {
    let (width, height) = original.dimensions();
    if width == 0 || height == 0 {
        return original.clone();
    }

    let mut current: Option<DynamicImage> = None;

    if !params.rotation.is_neutral() {
        let source = current.as_ref().unwrap_or(original);
        current = Some(rotate_expand(source, params.rotation));
    }

    if !params.scale.is_neutral() {
        let source = current.as_ref().unwrap_or(original);
        current = Some(scale_uniform(source, params.scale));
    }

    if params.has_skew() {
        let source = current.as_ref().unwrap_or(original);
        current = Some(shear(source, params.skew_x, params.skew_y));
    }

    current.unwrap_or_else(|| original.clone())
}

/// Rotates counter-clockwise about the centre, growing the canvas so no
/// corner is cropped.
///
/// Exact multiples of 90° use lossless quarter turns. Other angles are
/// inverse-mapped with nearest-neighbour sampling.
#[must_use]
pub fn rotate_expand(image: &DynamicImage, rotation: RotationDegrees) -> DynamicImage {
    if let Some(turns) = rotation.quarter_turns() {
        return image_transform::rotate_quarter_turns_ccw(image, turns);
    }

    let src = image.to_rgba8();
    let (width, height) = src.dimensions();
    let (w, h) = (f64::from(width), f64::from(height));

    let radians = f64::from(rotation.radians());
    let (sin, cos) = radians.sin_cos();
    let (cx, cy) = (w / 2.0, h / 2.0);

    // Output-to-input mapping relative to the source centre
    let map = |x: f64, y: f64| {
        let dx = x - cx;
        let dy = y - cy;
        (cos * dx - sin * dy + cx, sin * dx + cos * dy + cy)
    };

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        let (rx, ry) = map(x, y);
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    let new_width = expanded_extent(min_x, max_x);
    let new_height = expanded_extent(min_y, max_y);
    let (nw, nh) = (f64::from(new_width), f64::from(new_height));

    let output = RgbaImage::from_fn(new_width, new_height, |x, y| {
        // Sample at pixel centres; the output centre lines up with the source centre
        let ox = f64::from(x) + 0.5 - nw / 2.0;
        let oy = f64::from(y) + 0.5 - nh / 2.0;
        let sx = cos * ox - sin * oy + cx;
        let sy = sin * ox + cos * oy + cy;
        sample_nearest(&src, sx, sy).unwrap_or(TRANSPARENT)
    });

    DynamicImage::ImageRgba8(output)
}

/// Resizes uniformly by `scale` with Lanczos3.
#[must_use]
pub fn scale_uniform(image: &DynamicImage, scale: ScaleFactor) -> DynamicImage {
    let (width, height) = scale.apply_to_dimensions(image.width(), image.height());
    image_transform::resize(image, width, height)
}

/// Shears the image with the matrix `[[1, tan(x), 0], [tan(y), 1, 0], [0, 0, 1]]`.
///
/// The matrix maps each output pixel centre to the source position it
/// samples. The output keeps the input size; content pushed outside is clipped.
#[must_use]
pub fn shear(image: &DynamicImage, skew_x: SkewDegrees, skew_y: SkewDegrees) -> DynamicImage {
    let src = image.to_rgba8();
    let (width, height) = src.dimensions();
    let kx = skew_x.shear();
    let ky = skew_y.shear();

    let output = RgbaImage::from_fn(width, height, |x, y| {
        let u = f64::from(x) + 0.5;
        let v = f64::from(y) + 0.5;
        let su = u + kx * v;
        let sv = ky * u + v;
        sample_bicubic(&src, su, sv).unwrap_or(TRANSPARENT)
    });

    DynamicImage::ImageRgba8(output)
}

/// `ceil(max) - floor(min)`, tolerant of floating-point noise at integer edges.
fn expanded_extent(min: f64, max: f64) -> u32 {
    const SNAP: f64 = 1e-9;
    let extent = (max - SNAP).ceil() - (min + SNAP).floor();
    // Extent of a rotated u32-sized box fits comfortably in u32
    extent.max(1.0) as u32
}

/// Nearest-neighbour lookup at continuous coordinates (pixel edges at integers).
fn sample_nearest(src: &RgbaImage, x: f64, y: f64) -> Option<Rgba<u8>> {
    let (width, height) = src.dimensions();
    if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
        return None;
    }
    let (px, py) = (x.floor() as u32, y.floor() as u32);
    Some(*src.get_pixel(px.min(width - 1), py.min(height - 1)))
}

/// Bicubic lookup at continuous coordinates (pixel edges at integers).
///
/// Neighbours outside the image are clamped to the nearest edge pixel.
fn sample_bicubic(src: &RgbaImage, x: f64, y: f64) -> Option<Rgba<u8>> {
    let (width, height) = src.dimensions();
    if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
        return None;
    }

    // Move to pixel-centre space
    let cx = x - 0.5;
    let cy = y - 0.5;
    let x0 = cx.floor();
    let y0 = cy.floor();
    let fx = cx - x0;
    let fy = cy - y0;

    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    let (base_x, base_y) = (x0 as i64, y0 as i64);

    let mut acc = [0.0_f64; 4];
    for j in -1..=2_i64 {
        let wy = cubic_weight(j as f64 - fy);
        let py = (base_y + j).clamp(0, max_y) as u32;
        for i in -1..=2_i64 {
            let wx = cubic_weight(i as f64 - fx);
            let px = (base_x + i).clamp(0, max_x) as u32;
            let pixel = src.get_pixel(px, py);
            let weight = wx * wy;
            for (channel, value) in acc.iter_mut().zip(pixel.0) {
                *channel += weight * f64::from(value);
            }
        }
    }

    let to_u8 = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Some(Rgba([
        to_u8(acc[0]),
        to_u8(acc[1]),
        to_u8(acc[2]),
        to_u8(acc[3]),
    ]))
}

/// Catmull-Rom cubic convolution kernel.
fn cubic_weight(distance: f64) -> f64 {
    let d = distance.abs();
    if d <= 1.0 {
        ((BICUBIC_A + 2.0) * d - (BICUBIC_A + 3.0)) * d * d + 1.0
    } else if d < 2.0 {
        ((BICUBIC_A * d - 5.0 * BICUBIC_A) * d + 8.0 * BICUBIC_A) * d - 4.0 * BICUBIC_A
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::ImageBuffer;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8, 255])
        });
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn neutral_parameters_return_original_pixels() {
        let original = gradient(100, 60);
        let result = apply_transforms(&original, &TransformParameters::default());
        assert_eq!(result, original);
    }

    #[test]
    fn full_turn_is_neutral() {
        let original = gradient(10, 6);
        let params = TransformParameters::default().with_rotation(360.0);
        assert_eq!(apply_transforms(&original, &params), original);
    }

    #[test]
    fn scale_two_doubles_dimensions() {
        let original = gradient(100, 60);
        let params = TransformParameters::default().with_scale(2.0);
        assert_eq!(apply_transforms(&original, &params).dimensions(), (200, 120));
    }

    #[test]
    fn right_angle_rotation_swaps_dimensions() {
        let original = gradient(100, 60);
        let params = TransformParameters::default().with_rotation(90.0);
        assert_eq!(apply_transforms(&original, &params).dimensions(), (60, 100));
    }

    #[test]
    fn arbitrary_rotation_expands_canvas() {
        let original = gradient(100, 60);
        let rotated = rotate_expand(&original, RotationDegrees::new(45.0));
        // 100·cos45 + 60·sin45 ≈ 113.1, spread over the centred box
        let (w, h) = rotated.dimensions();
        assert!((113..=115).contains(&w), "width was {w}");
        assert!((113..=115).contains(&h), "height was {h}");
    }

    #[test]
    fn arbitrary_rotation_keeps_centre_and_clears_corners() {
        let original = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            40,
            40,
            Rgba([255, 0, 0, 255]),
        ));
        let rotated = rotate_expand(&original, RotationDegrees::new(30.0)).to_rgba8();
        let (w, h) = rotated.dimensions();

        assert_eq!(rotated.get_pixel(w / 2, h / 2).0, [255, 0, 0, 255]);
        assert_eq!(rotated.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn shear_keeps_size() {
        let original = gradient(50, 30);
        let params = TransformParameters::default()
            .with_skew_x(20.0)
            .with_skew_y(-10.0);
        assert_eq!(apply_transforms(&original, &params).dimensions(), (50, 30));
    }

    #[test]
    fn horizontal_shear_clips_content_outside_bounds() {
        let original = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            20,
            20,
            Rgba([0, 255, 0, 255]),
        ));
        let sheared = shear(&original, SkewDegrees::new(45.0), SkewDegrees::new(0.0)).to_rgba8();

        // Top-left samples inside the source; bottom-right samples past its right edge
        assert_eq!(sheared.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(sheared.get_pixel(19, 19).0, [0, 0, 0, 0]);
    }

    #[test]
    fn bicubic_reproduces_flat_colour() {
        let flat = RgbaImage::from_pixel(6, 6, Rgba([12, 34, 56, 255]));
        let sample = sample_bicubic(&flat, 2.3, 3.7).expect("inside bounds");
        assert_eq!(sample.0, [12, 34, 56, 255]);
    }

    #[test]
    fn cubic_weights_partition_unity() {
        for step in 0..10 {
            let f = f64::from(step) / 10.0;
            let sum: f64 = (-1..=2).map(|i| cubic_weight(f64::from(i) - f)).sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn transforms_are_deterministic() {
        let original = gradient(64, 48);
        let params = TransformParameters::default()
            .with_rotation(33.0)
            .with_scale(1.3)
            .with_skew_x(12.0)
            .with_skew_y(-7.0);

        let first = apply_transforms(&original, &params);
        let second = apply_transforms(&original, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn original_is_never_modified() {
        let original = gradient(32, 16);
        let snapshot = original.clone();
        let params = TransformParameters::default()
            .with_rotation(10.0)
            .with_scale(0.5)
            .with_skew_x(5.0);

        let _ = apply_transforms(&original, &params);
        assert_eq!(original, snapshot);
    }
}
