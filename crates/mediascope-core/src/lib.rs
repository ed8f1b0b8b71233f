//! # mediascope-core
//!
//! The metadata model behind mediascope.
//!
//! This crate turns the two textual summaries a metadata engine produces for
//! a media file (a basic one and a complete one) into a single ordered list
//! of [`Field`]s, derives the tab list ([`Category`]) from it, and renders
//! the grouped, aligned text view for a selected tab and search term.
//!
//! - **Parsing** ([`parser::parse`]) -- one summary into fields, tracking the
//!   current group heading.
//! - **Loading** ([`FieldRepository`]) -- asks a [`MetadataEngine`] for both
//!   summaries and concatenates the parsed fields, failing atomically.
//! - **Tabs** ([`category::synthesize`]) -- the `Basic` and `Advanced`
//!   pseudo-categories plus one category per group, captioned with the
//!   group's `Format` value.
//! - **Rendering** ([`render::render`]) -- selection, search filtering and
//!   column-aligned output.
//! - **Browsing** ([`navigator`]) -- previous/next file in the same folder.
//! - **State** ([`Session`]) -- the controller state replaced atomically on
//!   every load, tab switch and search.
//!
//! ## Example
//!
//! ```
//! use mediascope_core::{category, parser, render, Detail};
//!
//! let mut fields = parser::parse("General\nFormat: MPEG-4\n", Detail::Basic);
//! fields.extend(parser::parse("General\nOverallBitRate: 500 kb/s\n", Detail::Complete));
//!
//! let tabs = category::synthesize(&fields);
//! assert!(tabs.iter().any(|c| c.caption == "General (MPEG-4)"));
//!
//! let text = render::render(&fields, "General", "");
//! assert!(text.starts_with("General\n\n"));
//! ```

pub mod category;
pub mod engine;
pub mod error;
pub mod field;
pub mod navigator;
pub mod parser;
pub mod render;
pub mod repository;
pub mod session;

// ---- Re-exports for convenience ----

pub use category::{Category, ADVANCED, BASIC};
pub use engine::MetadataEngine;
pub use error::{Error, Result};
pub use field::{Detail, Field};
pub use navigator::{Direction, NavigationContext};
pub use repository::FieldRepository;
pub use session::{Escape, LoadResponse, LoadTicket, Session, APP_NAME};
