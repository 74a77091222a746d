// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations live in `assets/i18n/<locale>.ftl` and are embedded into the
//! binary. The locale comes from the CLI, then `settings.toml`, then the OS,
//! and finally falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
