// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// General Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS provides one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether the centre crosshair is visible when the application starts.
pub const DEFAULT_SHOW_CROSSHAIRS_ON_START: bool = false;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Smallest window that still fits the controls.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Smallest window that still fits the controls.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
