//! `mediainfo` backed [`MetadataEngine`].
//!
//! The basic summary is plain `mediainfo <file>`; the complete one adds
//! `-f`. Raw view adds `--Language=raw`, which makes mediainfo print internal
//! field names and untranslated values.

use std::path::{Path, PathBuf};
use std::process::Command;

use mediascope_core::{Detail, Error, MetadataEngine, Result};

use crate::tools;

const TOOL: &str = "mediainfo";

/// A metadata engine backed by the `mediainfo` CLI.
#[derive(Debug, Clone)]
pub struct MediaInfoEngine {
    program: PathBuf,
    raw_view: bool,
}

impl MediaInfoEngine {
    /// Create an engine using the given mediainfo binary.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            raw_view: false,
        }
    }

    /// Create an engine that finds mediainfo on `PATH`.
    pub fn from_path() -> Result<Self> {
        tools::require_tool(TOOL).map(Self::new)
    }

    /// Create an engine preferring `configured` over a `PATH` lookup.
    pub fn from_config(configured: Option<&Path>) -> Result<Self> {
        tools::get_tool_path(TOOL, configured).map(Self::new)
    }

    /// Ask mediainfo for raw field names and values.
    pub fn with_raw_view(mut self, raw_view: bool) -> Self {
        self.raw_view = raw_view;
        self
    }

    fn args(&self, detail: Detail) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.raw_view {
            args.push("--Language=raw");
        }
        if detail.is_detailed() {
            args.push("-f");
        }
        args
    }
}

impl MetadataEngine for MediaInfoEngine {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn summary(&self, path: &Path, detail: Detail) -> Result<String> {
        if !path.exists() {
            return Err(Error::file_not_found(path));
        }

        tracing::debug!(
            program = %self.program.display(),
            path = %path.display(),
            %detail,
            raw_view = self.raw_view,
            "running mediainfo"
        );

        let output = Command::new(&self.program)
            .args(self.args(detail))
            .arg(path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(TOOL)
                } else {
                    Error::tool_failed(TOOL, format!("failed to spawn: {e}"))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(
                TOOL,
                format!("exited with status {}: {}", output.status, stderr.trim()),
            ));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(Error::EmptySummary {
                tool: TOOL.to_string(),
                path: path.to_path_buf(),
                detail,
            });
        }

        Ok(text)
    }
}
