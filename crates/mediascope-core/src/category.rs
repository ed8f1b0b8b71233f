//! Tab list synthesis.
//!
//! Every load yields the two pseudo-categories [`BASIC`] and [`ADVANCED`]
//! followed by one category per distinct group, in order of first
//! appearance. A category whose group has a `Format` field is captioned
//! `"<group> (<format>)"`.

use serde::Serialize;

use crate::field::Field;

/// Pseudo-category showing every field of the basic summary.
pub const BASIC: &str = "Basic";

/// Pseudo-category showing every field of the complete summary.
pub const ADVANCED: &str = "Advanced";

/// Name of the field whose value decorates a category caption.
const TITLE_FIELD: &str = "Format";

/// A selectable view over the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Group name, or one of the pseudo-category keys.
    pub key: String,
    /// Display text.
    pub caption: String,
}

/// Derive the ordered category list for a field sequence.
pub fn synthesize(fields: &[Field]) -> Vec<Category> {
    let mut keys: Vec<&str> = vec![BASIC, ADVANCED];
    for field in fields {
        if !field.group.is_empty() && !keys.contains(&field.group.as_str()) {
            keys.push(&field.group);
        }
    }

    keys.into_iter()
        .map(|key| Category {
            key: key.to_string(),
            caption: caption_for(key, fields),
        })
        .collect()
}

fn caption_for(key: &str, fields: &[Field]) -> String {
    fields
        .iter()
        .find(|f| f.group == key && f.name == TITLE_FIELD)
        .map(|f| format!("{key} ({})", f.value))
        .unwrap_or_else(|| key.to_string())
}
