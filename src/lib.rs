// SPDX-License-Identifier: MPL-2.0
//! `faceflip` rotates, scales and skews an image and builds two mirror
//! composites from its left and right halves, built with the Iced GUI framework.
//!
//! The pixel pipeline (`media`) is independent of the UI and can be used on
//! its own:
//!
//! ```no_run
//! use faceflip::domain::transform::TransformParameters;
//! use faceflip::media;
//!
//! let original = media::load_image("face.jpg").unwrap();
//! let params = TransformParameters::default().with_rotation(5.0);
//! let views = media::derive_views(&original, &params);
//! media::combine_and_write(
//!     &views.composites.left,
//!     &views.composites.right,
//!     std::path::Path::new("combined.png"),
//! )
//! .unwrap();
//! ```

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
