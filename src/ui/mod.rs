// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": views borrow application state and
//! publish messages that `App::update` handles.
//!
//! - [`controls`] - Buttons and transform sliders
//! - [`surface`] - Canvas program drawing one preview, with crosshair and drag
//! - [`viewport`] - Fit-to-box placement and preview resampling
//! - [`state`] - Reusable interaction state (drag)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod state;
pub mod surface;
pub mod viewport;
