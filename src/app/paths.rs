// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override**: parameter of the `_with_override()` functions
//! 2. **CLI arguments**: `--config-dir` / `--data-dir`, set via [`init_cli_overrides`]
//! 3. **Environment variables**: `FACEFLIP_CONFIG_DIR` / `FACEFLIP_DATA_DIR`
//! 4. **Platform default**: `dirs` config/data directory plus the app name
//!
//! The config directory holds `settings.toml`; the data directory holds the
//! persisted dialog state.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "FaceFlip";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FACEFLIP_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FACEFLIP_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which application directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
    Config,
    Data,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Config => ENV_CONFIG_DIR,
            AppDir::Data => ENV_DATA_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            AppDir::Config => &CLI_CONFIG_DIR,
            AppDir::Data => &CLI_DATA_DIR,
        };
        cell.get().cloned().flatten()
    }

    fn platform_default(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Data => dirs::data_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }

        if let Some(path) = self.cli_override() {
            return Some(path);
        }

        if let Ok(env_path) = std::env::var(self.env_var()) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        self.platform_default().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Records the `--data-dir` / `--config-dir` command line values.
///
/// Only the first call has an effect; returns false when overrides were
/// already initialized.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

/// Returns the application data directory, if one can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory; `override_path` wins when set.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Data.resolve(override_path)
}

/// Returns the application config directory, if one can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory; `override_path` wins when set.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.resolve(override_path)
}
