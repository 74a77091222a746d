// SPDX-License-Identifier: MPL-2.0
//! Image primitives shared by the geometry engine, the compositor and the
//! viewport: quarter-turn rotation, resize, flip, crop and side-by-side paste.

use image_rs::{imageops, imageops::FilterType, DynamicImage, GenericImageView, RgbImage};

/// Rotate an image counter-clockwise by whole quarter turns.
///
/// These are exact pixel permutations, so no resampling happens.
pub fn rotate_quarter_turns_ccw(image: &DynamicImage, turns: u8) -> DynamicImage {
    match turns % 4 {
        1 => image.rotate270(),
        2 => image.rotate180(),
        3 => image.rotate90(),
        _ => image.clone(),
    }
}

/// Flip an image horizontally (mirror left-to-right).
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Resize the image to the provided dimensions using a high-quality filter.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Crop the columns `[x_start, x_end)` over the full image height.
///
/// The range is clamped to the image; an empty range yields a zero-width image.
pub fn crop_columns(image: &DynamicImage, x_start: u32, x_end: u32) -> DynamicImage {
    let width = image.width();
    let x_start = x_start.min(width);
    let x_end = x_end.clamp(x_start, width);
    image.crop_imm(x_start, 0, x_end - x_start, image.height())
}

/// Place `left` and `right` next to each other on a new RGB canvas.
///
/// Both images are top-aligned. The canvas is as wide as both inputs together
/// and as tall as the taller one; the uncovered area stays black.
pub fn side_by_side(left: &DynamicImage, right: &DynamicImage) -> DynamicImage {
    let (left_width, left_height) = left.dimensions();
    let (right_width, right_height) = right.dimensions();

    let mut canvas = RgbImage::new(
        left_width.saturating_add(right_width),
        left_height.max(right_height),
    );
    imageops::replace(&mut canvas, &left.to_rgb8(), 0, 0);
    imageops::replace(&mut canvas, &right.to_rgb8(), i64::from(left_width), 0);

    DynamicImage::ImageRgb8(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, Rgb, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let img = create_test_image(4, 3);
        let rotated = rotate_quarter_turns_ccw(&img, 1);
        assert_eq!(rotated.dimensions(), (3, 4));
        let rotated = rotate_quarter_turns_ccw(&img, 2);
        assert_eq!(rotated.dimensions(), (4, 3));
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        // Marker in the top-right corner
        let mut buffer = ImageBuffer::from_pixel(3, 2, Rgba([0, 0, 0, 255]));
        buffer.put_pixel(2, 0, Rgba([255, 255, 255, 255]));
        let img = DynamicImage::ImageRgba8(buffer);

        let rotated = rotate_quarter_turns_ccw(&img, 1).to_rgba8();

        // A counter-clockwise turn moves the top-right corner to the top-left
        assert_eq!(rotated.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let mut buffer = ImageBuffer::from_pixel(3, 2, Rgba([0, 0, 0, 255]));
        buffer.put_pixel(1, 0, Rgba([9, 8, 7, 255]));
        let img = DynamicImage::ImageRgba8(buffer);

        let mut rotated = img.clone();
        for _ in 0..4 {
            rotated = rotate_quarter_turns_ccw(&rotated, 1);
        }
        assert_eq!(rotated, img);
    }

    #[test]
    fn resize_changes_dimensions() {
        let img = create_test_image(8, 4);
        let resized = resize(&img, 4, 2);
        assert_eq!(resized.dimensions(), (4, 2));
    }

    #[test]
    fn flip_horizontal_mirrors_pixels_left_to_right() {
        let mut buffer = ImageBuffer::from_pixel(4, 2, Rgba([0, 0, 0, 255]));
        for x in 2..4 {
            for y in 0..2 {
                buffer.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buffer);

        let flipped = flip_horizontal(&img).to_rgba8();

        assert_eq!(
            flipped.get_pixel(0, 0).0,
            [255, 255, 255, 255],
            "Top-left should be white after flip"
        );
        assert_eq!(
            flipped.get_pixel(3, 0).0,
            [0, 0, 0, 255],
            "Top-right should be black after flip"
        );
    }

    #[test]
    fn crop_columns_clamps_to_width() {
        let img = create_test_image(10, 4);
        assert_eq!(crop_columns(&img, 6, 20).dimensions(), (4, 4));
        assert_eq!(crop_columns(&img, 12, 20).dimensions(), (0, 4));
        assert_eq!(crop_columns(&img, 5, 3).dimensions(), (0, 4));
    }

    #[test]
    fn side_by_side_places_images_top_aligned() {
        let tall = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 4, Rgb([200, 0, 0])));
        let short = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([0, 0, 200])));

        let combined = side_by_side(&tall, &short).to_rgb8();

        assert_eq!(combined.dimensions(), (5, 4));
        assert_eq!(combined.get_pixel(1, 3).0, [200, 0, 0]);
        assert_eq!(combined.get_pixel(2, 0).0, [0, 0, 200]);
        // Gap below the shorter image stays blank
        assert_eq!(combined.get_pixel(4, 3).0, [0, 0, 0]);
    }

    #[test]
    fn side_by_side_with_empty_side_keeps_other() {
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 3));
        let solid = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 3, Rgb([1, 2, 3])));

        let combined = side_by_side(&empty, &solid);
        assert_eq!(combined.dimensions(), (2, 3));
        assert_eq!(combined.to_rgb8().get_pixel(0, 0).0, [1, 2, 3]);
    }
}
