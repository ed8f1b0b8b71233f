//! Loading the unified field list for a file.

use std::path::Path;

use crate::engine::MetadataEngine;
use crate::field::{Detail, Field};
use crate::parser;
use crate::Result;

/// Produces the field sequence for a file from both summary levels.
#[derive(Debug, Clone)]
pub struct FieldRepository<E> {
    engine: E,
}

impl<E: MetadataEngine> FieldRepository<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Load all fields of `path`: every basic field, then every complete one.
    ///
    /// The engine is asked for the basic summary first and the complete one
    /// second. If either call fails the error is returned and no fields are.
    pub fn load(&self, path: &Path) -> Result<Vec<Field>> {
        let basic = self.engine.summary(path, Detail::Basic)?;
        let complete = self.engine.summary(path, Detail::Complete)?;

        let mut fields = parser::parse(&basic, Detail::Basic);
        let basic_count = fields.len();
        fields.extend(parser::parse(&complete, Detail::Complete));

        tracing::debug!(
            engine = self.engine.name(),
            path = %path.display(),
            basic = basic_count,
            complete = fields.len() - basic_count,
            "parsed summaries"
        );

        Ok(fields)
    }
}
