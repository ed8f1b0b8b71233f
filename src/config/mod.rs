pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where settings live when no path is given.
pub const DEFAULT_SETTINGS_PATH: &str = "~/.config/mediascope/settings.conf";

/// The default settings path with `~` expanded.
pub fn default_settings_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_SETTINGS_PATH).as_ref())
}

/// Load settings from a `key = value` file
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {:?}", path))?;

    Ok(Settings::parse(&content))
}

/// Load settings from `custom_path` or the default location, creating the
/// file with defaults first if it is missing.
///
/// Returns the path that was used. When the file cannot be created the
/// defaults are used.
pub fn load_settings_or_init(custom_path: Option<&Path>) -> Result<(PathBuf, Settings)> {
    let path = custom_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_settings_path);

    if let Err(e) = persist::ensure_settings_file(&path) {
        tracing::warn!("{e:#}; using default settings");
        return Ok((path, Settings::default()));
    }

    let settings = load_settings(&path)?;
    Ok((path, settings))
}
