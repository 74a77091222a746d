// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::controls;
use crate::ui::surface::SurfaceEvent;
use image_rs::DynamicImage;
use std::path::PathBuf;

/// Where a load request came from, recorded in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Dialog,
    CommandLine,
}

impl LoadSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LoadSource::Dialog => "dialog",
            LoadSource::CommandLine => "cli",
        }
    }
}

/// A decoded image ready to become the new original.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub image: Box<DynamicImage>,
    pub source: LoadSource,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Surface(SurfaceEvent),
    /// Ctrl+O
    OpenShortcut,
    /// Ctrl+S
    SaveShortcut,
    /// Result from the open file dialog.
    OpenDialogResult(Option<PathBuf>),
    /// Result of decoding the chosen file.
    ImageLoaded(Result<LoadedImage, Error>),
    /// Result from the save file dialog.
    SaveDialogResult(Option<PathBuf>),
    /// A message dialog was dismissed.
    DialogClosed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image to load at startup.
    pub file_path: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional data directory override (`--data-dir`).
    pub data_dir: Option<String>,
}
