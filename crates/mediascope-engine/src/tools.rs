//! External tool detection.

use mediascope_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// # Example
///
/// ```no_run
/// use mediascope_engine::check_tool;
///
/// let info = check_tool("mediainfo", None);
/// if info.available {
///     println!("mediainfo version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str, configured: Option<&Path>) -> ToolInfo {
    check_tool_with_arg(name, configured, "--Version")
}

/// Check if a tool is available using a custom version argument.
fn check_tool_with_arg(name: &str, configured: Option<&Path>, version_arg: &str) -> ToolInfo {
    let Ok(path) = get_tool_path(name, configured) else {
        return ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        };
    };

    match Command::new(&path).arg(version_arg).output() {
        Ok(output) if output.status.success() => {
            // mediainfo prints a banner line before the version.
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .last()
                .map(|s| s.to_string());

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path: Some(path),
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: Some(path),
        },
    }
}

/// Check every tool mediascope can use.
pub fn check_tools(mediainfo: Option<&Path>) -> Vec<ToolInfo> {
    vec![check_tool("mediainfo", mediainfo)]
}

/// Require that a tool is available on `PATH`, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            "configured {name} at {} does not exist; searching PATH",
            path.display()
        );
    }

    require_tool(name)
}
