// SPDX-License-Identifier: MPL-2.0
//! Image handling: decoding, the transform pipeline, mirror composites and
//! export.

pub mod composite;
pub mod export;
pub mod geometry;
pub mod image;
pub mod image_transform;
pub mod pipeline;

// Re-export commonly used types
pub use composite::{build_composites, Composites};
pub use export::{combine, combine_and_write, ExportError};
pub use extensions::{IMAGE_EXTENSIONS, SAVE_FILTERS};
pub use geometry::apply_transforms;
pub use image::{load_image, ImageData};
pub use pipeline::{derive_views, DerivedViews};

/// Supported file extensions for dialogs.
pub mod extensions {
    /// Image file extensions offered by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

    /// Format filters for the save dialog; the first entry is the default.
    pub const SAVE_FILTERS: &[(&str, &[&str])] = &[("PNG", &["png"]), ("JPEG", &["jpg", "jpeg"])];

    /// Default file name proposed by the save dialog.
    pub const DEFAULT_EXPORT_NAME: &str = "combined.png";
}

/// Returns true when `path` has one of the openable image extensions.
#[must_use]
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
