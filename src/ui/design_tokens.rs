// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizing and type scale shared by the views.
//!
//! ```
//! use faceflip::ui::design_tokens::{palette, spacing};
//!
//! let padding = spacing::MD; // 16px
//! let line = palette::BLACK;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    /// Width of the control column on the left.
    pub const CONTROLS_WIDTH: f32 = 260.0;
    /// Width of the numeric readout next to each slider label.
    pub const VALUE_LABEL_WIDTH: f32 = 56.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Panel titles
    pub const TITLE_SM: f32 = 18.0;
    /// Default body text
    pub const BODY: f32 = 14.0;
    /// Slider readouts
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Panel outlines
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Crosshair Overlay
// ============================================================================

pub mod crosshair {
    /// Line width in logical pixels.
    pub const WIDTH: f32 = 1.0;
    /// Dash pattern: 4 on, 4 off.
    pub const DASH: [f32; 2] = [4.0, 4.0];
}

/// Crosshair line color.
#[must_use]
pub fn crosshair_color() -> Color {
    palette::BLACK
}

/// Outline drawn around each preview surface.
#[must_use]
pub fn surface_outline_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(crosshair::DASH[0] > 0.0 && crosshair::DASH[1] > 0.0);
};
