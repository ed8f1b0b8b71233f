//! The field record shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbosity level requested from the metadata engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// The short summary.
    Basic,
    /// The complete, verbose summary.
    Complete,
}

impl Detail {
    /// Whether fields parsed at this level count as detailed.
    pub fn is_detailed(self) -> bool {
        matches!(self, Detail::Complete)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Basic => write!(f, "basic"),
            Detail::Complete => write!(f, "complete"),
        }
    }
}

/// One labeled metadata datum.
///
/// Fields are never modified after construction. An empty `name` marks a
/// value-only line; an empty `group` means the field appeared before any
/// group heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub group: String,
    pub is_detailed: bool,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        group: impl Into<String>,
        detail: Detail,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            group: group.into(),
            is_detailed: detail.is_detailed(),
        }
    }

    /// The blank row placed between the basic and complete fields of a group.
    pub fn separator(group: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            group: group.into(),
            is_detailed: false,
        }
    }

    /// Case-insensitive substring match against name or value.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }
}
