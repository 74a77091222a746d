// SPDX-License-Identifier: MPL-2.0
//! Geometric transform domain types.
//!
//! This module provides pure value objects describing how the loaded image
//! is transformed before the mirror composites are derived:
//! - [`RotationDegrees`], [`ScaleFactor`], [`SkewDegrees`]: clamped parameters
//! - [`TranslationOffset`]: on-screen placement of the main preview
//! - [`TransformParameters`]: the aggregate the geometry engine consumes

pub mod newtypes;

pub use newtypes::{
    rotation_bounds, scale_bounds, skew_bounds, RotationDegrees, ScaleFactor, SkewDegrees,
    TranslationOffset,
};

/// Full set of user-controlled transform parameters.
///
/// Always reflects the latest UI state. There is no history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformParameters {
    pub rotation: RotationDegrees,
    pub scale: ScaleFactor,
    pub skew_x: SkewDegrees,
    pub skew_y: SkewDegrees,
    pub offset: TranslationOffset,
}

impl TransformParameters {
    /// Returns true when every pixel-affecting parameter is neutral.
    ///
    /// The translation offset is ignored: it never changes pixel content.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotation.is_neutral()
            && self.scale.is_neutral()
            && self.skew_x.is_neutral()
            && self.skew_y.is_neutral()
    }

    /// Returns true when at least one skew axis is active.
    #[must_use]
    pub fn has_skew(&self) -> bool {
        !self.skew_x.is_neutral() || !self.skew_y.is_neutral()
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = RotationDegrees::new(degrees);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, factor: f32) -> Self {
        self.scale = ScaleFactor::new(factor);
        self
    }

    #[must_use]
    pub fn with_skew_x(mut self, degrees: f32) -> Self {
        self.skew_x = SkewDegrees::new(degrees);
        self
    }

    #[must_use]
    pub fn with_skew_y(mut self, degrees: f32) -> Self {
        self.skew_y = SkewDegrees::new(degrees);
        self
    }
}
