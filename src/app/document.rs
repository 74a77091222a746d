// SPDX-License-Identifier: MPL-2.0
//! The loaded image and everything derived from it.
//!
//! A `Document` owns the original, the current parameters, the derived views
//! and one display preview per surface. Every parameter change goes through
//! [`Document::set_parameters`], which rebuilds the views from the original.

use crate::domain::transform::TransformParameters;
use crate::media::composite;
use crate::media::image::ImageData;
use crate::media::pipeline::{self, DerivationTiming, DerivedViews};
use crate::ui::surface::SurfaceKind;
use crate::ui::viewport;
use iced::Size;
use image_rs::DynamicImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Document {
    original: Option<DynamicImage>,
    path: Option<PathBuf>,
    params: TransformParameters,
    views: Option<DerivedViews>,
    previews: HashMap<SurfaceKind, ImageData>,
    surface_sizes: HashMap<SurfaceKind, Size>,
}

impl Document {
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    #[must_use]
    pub fn original(&self) -> Option<&DynamicImage> {
        self.original.as_ref()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }

    #[must_use]
    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    #[must_use]
    pub fn views(&self) -> Option<&DerivedViews> {
        self.views.as_ref()
    }

    #[must_use]
    pub fn preview(&self, kind: SurfaceKind) -> Option<&ImageData> {
        self.previews.get(&kind)
    }

    /// Replaces the original image, dropping the previous one and its views.
    ///
    /// Parameters carry over so the sliders keep matching the image.
    pub fn replace_original(&mut self, path: PathBuf, image: DynamicImage) -> DerivationTiming {
        self.original = Some(image);
        self.path = Some(path);
        self.views = None;
        self.rebuild_views().unwrap_or_default()
    }

    /// Stores new parameters and rebuilds the views when pixel content can change.
    ///
    /// Returns the timing of the rebuild, or `None` when nothing was derived
    /// (no image loaded, or only the offset moved).
    pub fn set_parameters(&mut self, params: TransformParameters) -> Option<DerivationTiming> {
        let previous = std::mem::replace(&mut self.params, params);
        let pixels_changed = TransformParameters {
            offset: previous.offset,
            ..params
        } != previous;

        if pixels_changed {
            self.rebuild_views()
        } else {
            None
        }
    }

    /// Moves the main preview by a whole-pixel delta.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.params.offset = self.params.offset.translated(dx, dy);
    }

    /// Rebuilds both composites from the current transformed image.
    ///
    /// The transformed image itself is reused as is.
    pub fn rebuild_composites(&mut self) -> Option<Duration> {
        let views = self.views.as_mut()?;
        let started = Instant::now();
        views.composites = composite::build_composites(&views.transformed);
        let elapsed = started.elapsed();

        self.refresh_preview(SurfaceKind::LeftComposite);
        self.refresh_preview(SurfaceKind::RightComposite);
        Some(elapsed)
    }

    /// Records the laid-out size of a surface and renders its preview.
    pub fn resize_surface(&mut self, kind: SurfaceKind, size: Size) {
        if viewport::has_extent(size) {
            self.surface_sizes.insert(kind, size);
        } else {
            self.surface_sizes.remove(&kind);
        }
        self.refresh_preview(kind);
    }

    fn rebuild_views(&mut self) -> Option<DerivationTiming> {
        let original = self.original.as_ref()?;
        let (views, timing) = pipeline::derive_views_timed(original, &self.params);
        self.views = Some(views);

        for kind in SurfaceKind::ALL {
            self.refresh_preview(kind);
        }
        Some(timing)
    }

    fn refresh_preview(&mut self, kind: SurfaceKind) {
        let preview = self.views.as_ref().and_then(|views| {
            let size = self.surface_sizes.get(&kind)?;
            let source = match kind {
                SurfaceKind::Main => &views.transformed,
                SurfaceKind::LeftComposite => &views.composites.left,
                SurfaceKind::RightComposite => &views.composites.right,
            };
            viewport::render_preview(source, *size)
        });

        match preview {
            Some(preview) => {
                self.previews.insert(kind, preview);
            }
            None => {
                self.previews.remove(&kind);
            }
        }
    }
}
