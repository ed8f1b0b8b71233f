//! Wiring between settings, the mediainfo engine and the loader.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use mediascope_core::Session;
use mediascope_engine::MediaInfoEngine;

use crate::config::{self, Settings};
use crate::loader::Loader;

/// Build the mediainfo engine described by `settings`.
pub fn open_engine(settings: &Settings) -> Result<MediaInfoEngine> {
    let engine = MediaInfoEngine::from_config(settings.mediainfo.as_deref())
        .context("mediainfo is required to read media metadata")?;
    Ok(engine.with_raw_view(settings.raw_view))
}

/// Build a loader for `settings`.
pub fn open_loader(settings: &Settings) -> Result<Loader<MediaInfoEngine>> {
    let engine = open_engine(settings)?;
    Ok(Loader::new(
        engine,
        Duration::from_secs(settings.load_timeout_secs),
    ))
}

/// Read settings and build a fresh engine, as done at startup and on reload.
pub fn reload(settings_path: Option<&Path>) -> Result<(MediaInfoEngine, Settings)> {
    let (path, settings) = config::load_settings_or_init(settings_path)?;
    tracing::debug!("Using settings from {}", path.display());
    let engine = open_engine(&settings)?;
    Ok((engine, settings))
}

/// Load one file into a new session.
pub async fn load_session(settings: &Settings, file: &Path) -> Result<Session> {
    let mut loader = open_loader(settings)?;
    let mut session = Session::new();
    loader
        .load(&mut session, PathBuf::from(file))
        .await
        .with_context(|| format!("Failed to read metadata of {:?}", file))?;
    Ok(session)
}
