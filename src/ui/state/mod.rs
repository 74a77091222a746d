// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the main App struct.

pub mod drag;

pub use drag::DragState;
