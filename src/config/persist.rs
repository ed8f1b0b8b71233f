//! Settings file creation and writing.

use super::Settings;
use anyhow::{Context, Result};
use std::path::Path;

/// Create `path` with the default settings if it does not exist yet.
///
/// Returns whether the file was created.
pub fn ensure_settings_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    save_settings(path, &Settings::default())?;
    tracing::info!("Created default settings file at {}", path.display());
    Ok(true)
}

/// Write `settings` to `path`, replacing its contents.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
    }

    std::fs::write(path, settings.to_conf())
        .with_context(|| format!("Failed to write settings file: {:?}", path))
}
