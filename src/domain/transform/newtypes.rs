// SPDX-License-Identifier: MPL-2.0
//! Transform newtypes.
//!
//! This module provides type-safe wrappers for the geometric transform
//! parameters, ensuring they are always within valid ranges.

// =============================================================================
// Bounds
// =============================================================================

/// Rotation bounds (0° to 360°).
pub mod rotation_bounds {
    /// Minimum rotation in degrees.
    pub const MIN: f32 = 0.0;
    /// Maximum rotation in degrees.
    pub const MAX: f32 = 360.0;
    /// Slider step in degrees.
    pub const STEP: f32 = 1.0;
}

/// Uniform scale bounds (0.1x to 3.0x).
pub mod scale_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.1;
    /// Maximum scale factor.
    pub const MAX: f32 = 3.0;
    /// Neutral scale factor.
    pub const DEFAULT: f32 = 1.0;
    /// Slider step.
    pub const STEP: f32 = 0.1;
}

/// Skew bounds (-45° to +45°), shared by both axes.
pub mod skew_bounds {
    /// Minimum skew in degrees.
    pub const MIN: f32 = -45.0;
    /// Maximum skew in degrees.
    pub const MAX: f32 = 45.0;
    /// Slider step in degrees.
    pub const STEP: f32 = 1.0;
}

/// Tolerance used when deciding whether a parameter sits at its neutral value.
const NEUTRAL_EPSILON: f32 = 1e-4;

// =============================================================================
// RotationDegrees
// =============================================================================

/// Counter-clockwise rotation angle in degrees, clamped to 0–360.
///
/// Both 0° and 360° are neutral: they leave the image untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDegrees(f32);

impl RotationDegrees {
    /// Creates a rotation, clamping to the valid range. NaN maps to 0°.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(rotation_bounds::MIN, rotation_bounds::MAX))
    }

    /// Returns the raw angle in degrees.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the angle reduced to `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> f32 {
        self.0.rem_euclid(360.0)
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.normalized().to_radians()
    }

    /// Returns true when applying this rotation is a no-op.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        let normalized = self.normalized();
        normalized < NEUTRAL_EPSILON || (360.0 - normalized) < NEUTRAL_EPSILON
    }

    /// Returns the number of counter-clockwise quarter turns when the angle is
    /// an exact multiple of 90°.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn quarter_turns(self) -> Option<u8> {
        let normalized = self.normalized();
        let turns = (normalized / 90.0).round();
        if (normalized - turns * 90.0).abs() < NEUTRAL_EPSILON {
            // normalized is in [0, 360), so turns is 0..=4
            Some((turns as u8) % 4)
        } else {
            None
        }
    }
}

// =============================================================================
// ScaleFactor
// =============================================================================

const SCALE_MICROS: u64 = 1_000_000;

/// Uniform scale multiplier, clamped to 0.1–3.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a scale factor, clamping to the valid range. NaN maps to 1.0.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when the scale is 1.0.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        (self.0 - scale_bounds::DEFAULT).abs() < NEUTRAL_EPSILON
    }

    /// Applies the scale to the given dimensions.
    ///
    /// Each dimension is `round(dim × factor)` and at least 1 pixel. The
    /// factor is taken at its decimal value, so `0.7 × 5` gives 4.
    #[must_use]
    pub fn apply_to_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        let micros = self.micros();
        // Half-up integer rounding on the exact product
        let scale = |dim: u32| {
            let scaled = (u64::from(dim) * micros + SCALE_MICROS / 2) / SCALE_MICROS;
            u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
        };
        (scale(width), scale(height))
    }

    /// The factor in millionths. Slider steps such as 0.7 or 2.3 sit
    /// slightly off their decimal value as `f32`; this snaps them back.
    fn micros(self) -> u64 {
        // The factor is clamped to 0.1–3.0, so the product is small and positive
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (f64::from(self.0) * 1_000_000.0).round() as u64
        }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// SkewDegrees
// =============================================================================

/// Shear angle in degrees for one axis, clamped to -45–45.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkewDegrees(f32);

impl SkewDegrees {
    /// Creates a skew angle, clamping to the valid range. NaN maps to 0°.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(skew_bounds::MIN, skew_bounds::MAX))
    }

    /// Returns the raw angle in degrees.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `tan(angle)`, the shear coefficient used by the affine map.
    #[must_use]
    pub fn shear(self) -> f64 {
        f64::from(self.0).to_radians().tan()
    }

    /// Returns true when the skew is 0°.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0.abs() < NEUTRAL_EPSILON
    }
}

// =============================================================================
// TranslationOffset
// =============================================================================

/// Pixel offset of the main preview from the surface centre.
///
/// Only affects placement on screen, never pixel content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslationOffset {
    pub x: i32,
    pub y: i32,
}

impl TranslationOffset {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this offset moved by the given delta.
    #[must_use]
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}
