//! # mediascope-engine
//!
//! Produces the raw summaries mediascope organizes by shelling out to the
//! `mediainfo` command-line tool.
//!
//! - [`MediaInfoEngine`] implements [`mediascope_core::MetadataEngine`].
//! - [`tools`] finds and reports the external binaries.
//!
//! ## Example
//!
//! ```no_run
//! use mediascope_core::{FieldRepository, MetadataEngine};
//! use mediascope_engine::MediaInfoEngine;
//!
//! let engine = MediaInfoEngine::from_path()?;
//! let fields = FieldRepository::new(engine).load("/path/to/video.mkv".as_ref())?;
//! println!("{} fields", fields.len());
//! # Ok::<(), mediascope_core::Error>(())
//! ```

pub mod mediainfo;
pub mod tools;

// Re-exports
pub use mediainfo::MediaInfoEngine;
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};
