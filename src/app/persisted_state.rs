// SPDX-License-Identifier: MPL-2.0
//! Dialog directories remembered across sessions, stored as CBOR.
//!
//! This is application-managed state, kept apart from the user-editable
//! `settings.toml`. Transform parameters are never stored here.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Why the state file could not be loaded or saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateWarning {
    /// No data directory could be determined.
    NoDataDir,
    /// The file exists but could not be opened or created.
    Access,
    /// The file content is not valid CBOR for [`AppState`].
    Parse,
    /// Encoding the state failed.
    Write,
}

impl StateWarning {
    /// Returns the i18n key describing this warning.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StateWarning::NoDataDir => "warning-state-path",
            StateWarning::Access => "warning-state-access",
            StateWarning::Parse => "warning-state-parse",
            StateWarning::Write => "warning-state-write",
        }
    }
}

/// Directories the file dialogs should start in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last exported combined image.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Directory of the last opened image.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the resolved data directory.
    ///
    /// A missing file yields the default state without a warning.
    #[must_use]
    pub fn load() -> (Self, Option<StateWarning>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the resolved data directory.
    #[must_use]
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<StateWarning>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(&path) {
            Ok(state) => (state, None),
            Err(warning) => (Self::default(), Some(warning)),
        }
    }

    fn read(path: &Path) -> Result<Self, StateWarning> {
        let file = fs::File::open(path).map_err(|_| StateWarning::Access)?;
        ciborium::from_reader(BufReader::new(file)).map_err(|_| StateWarning::Parse)
    }

    /// Saves state to the resolved data directory.
    pub fn save(&self) -> Option<StateWarning> {
        self.save_to(None)
    }

    /// Saves state to `base_dir`, or the resolved data directory, creating
    /// it when needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<StateWarning> {
        let Some(path) = state_file_path(base_dir) else {
            return Some(StateWarning::NoDataDir);
        };
        self.write(&path).err()
    }

    fn write(&self, path: &Path) -> Result<(), StateWarning> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| StateWarning::Access)?;
        }
        let file = fs::File::create(path).map_err(|_| StateWarning::Access)?;
        ciborium::into_writer(self, BufWriter::new(file)).map_err(|_| StateWarning::Write)
    }

    /// Remembers the directory containing `file_path` for the save dialog.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_save_directory = Some(parent);
        }
    }

    /// Remembers the directory containing `file_path` for the open dialog.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = non_empty_parent(file_path) {
            self.last_open_directory = Some(parent);
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

fn non_empty_parent(file_path: &Path) -> Option<PathBuf> {
    file_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
