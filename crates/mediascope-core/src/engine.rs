//! The metadata engine seam.
//!
//! An engine turns a file path and a [`Detail`] level into the raw summary
//! text that [`crate::parser`] understands. The `mediascope-engine` crate
//! provides the `mediainfo` implementation; tests plug in canned text.

use std::path::Path;

use crate::field::Detail;
use crate::Result;

/// A source of textual metadata summaries.
pub trait MetadataEngine: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Produce the summary of `path` at the requested detail level.
    fn summary(&self, path: &Path, detail: Detail) -> Result<String>;
}

impl<E: MetadataEngine + ?Sized> MetadataEngine for std::sync::Arc<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn summary(&self, path: &Path, detail: Detail) -> Result<String> {
        (**self).summary(path, detail)
    }
}

impl<E: MetadataEngine + ?Sized> MetadataEngine for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn summary(&self, path: &Path, detail: Detail) -> Result<String> {
        (**self).summary(path, detail)
    }
}
