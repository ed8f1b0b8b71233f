//! Error types for mediascope-core.
//!
//! Everything that can go wrong while fetching a summary from the metadata
//! engine ends up in [`Error`]. Parsing, category synthesis and rendering
//! never fail.

use std::path::PathBuf;
use std::time::Duration;

use crate::field::Detail;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading metadata for a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The metadata engine binary is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The metadata engine ran but reported a failure.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// The file to inspect does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The engine produced no output for the file.
    #[error("{tool} produced an empty {detail} summary for {}", path.display())]
    EmptySummary {
        tool: String,
        path: PathBuf,
        detail: Detail,
    },

    /// The load did not finish within the configured time.
    #[error("loading {} timed out after {after:?}", path.display())]
    Timeout { path: PathBuf, after: Duration },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for unexpected internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Whether the metadata engine could not produce a summary.
    ///
    /// I/O and internal errors are the only failures not attributed to the
    /// engine.
    pub fn is_engine_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_errors_display() {
        let err = Error::tool_not_found("mediainfo");
        assert_eq!(err.to_string(), "tool not found: mediainfo");

        let err = Error::tool_failed("mediainfo", "exit status 1");
        assert_eq!(
            err.to_string(),
            "tool execution failed: mediainfo: exit status 1"
        );
    }

    #[test]
    fn empty_summary_names_detail_level() {
        let err = Error::EmptySummary {
            tool: "mediainfo".into(),
            path: PathBuf::from("/media/clip.mkv"),
            detail: Detail::Complete,
        };
        assert_eq!(
            err.to_string(),
            "mediainfo produced an empty complete summary for /media/clip.mkv"
        );
    }

    #[test]
    fn engine_classification() {
        assert!(Error::file_not_found("/nope.mkv").is_engine_error());
        assert!(Error::Timeout {
            path: PathBuf::from("a.mkv"),
            after: Duration::from_secs(1),
        }
        .is_engine_error());

        let io = Error::from(std::io::Error::other("disk"));
        assert!(matches!(io, Error::Io(_)));
        assert!(!io.is_engine_error());
        assert!(!Error::Internal("panicked".into()).is_engine_error());
    }
}
