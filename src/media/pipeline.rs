// SPDX-License-Identifier: MPL-2.0
//! The single recompute path: original + parameters → transformed image and
//! both mirror composites.

use crate::domain::transform::TransformParameters;
use crate::media::composite::{self, Composites};
use crate::media::geometry;
use image_rs::DynamicImage;
use std::time::{Duration, Instant};

/// Everything derived from the original image for one parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    pub transformed: DynamicImage,
    pub composites: Composites,
}

/// Wall-clock cost of one derivation, reported to diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivationTiming {
    pub transform: Duration,
    pub composite: Duration,
}

/// Recomputes the transformed image and both composites from scratch.
///
/// Idempotent: equal inputs always produce pixel-identical outputs.
#[must_use]
pub fn derive_views(original: &DynamicImage, params: &TransformParameters) -> DerivedViews {
    derive_views_timed(original, params).0
}

/// Same as [`derive_views`], also returning how long each stage took.
#[must_use]
pub fn derive_views_timed(
    original: &DynamicImage,
    params: &TransformParameters,
) -> (DerivedViews, DerivationTiming) {
    let started = Instant::now();
    let transformed = geometry::apply_transforms(original, params);
    let transform = started.elapsed();

    let started = Instant::now();
    let composites = composite::build_composites(&transformed);
    let composite = started.elapsed();

    (
        DerivedViews {
            transformed,
            composites,
        },
        DerivationTiming {
            transform,
            composite,
        },
    )
}
