//! Text view rendering.
//!
//! [`select`] picks the fields for a category, [`filter`] applies the search
//! term, and [`format`] lays them out as group blocks:
//!
//! ```text
//! General
//!
//! Format                   : MPEG-4
//! Duration                 : 1:02
//!
//! OverallBitRate           : 500 kb/s
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use crate::category::{ADVANCED, BASIC};
use crate::field::Field;

/// Minimum width of the name column.
pub const NAME_WIDTH: usize = 25;

/// Render the view for `category` with `search` applied.
pub fn render(fields: &[Field], category: &str, search: &str) -> String {
    let selected = select(fields, category);
    let filtered = filter(selected, search);
    format(&filtered)
}

/// Fields shown by a category, in display order.
///
/// The pseudo-categories slice by detail level across all groups. A group
/// category shows its basic fields, one blank separator row, then its
/// complete fields.
pub fn select<'a>(fields: &'a [Field], category: &str) -> Vec<Cow<'a, Field>> {
    match category {
        ADVANCED => fields
            .iter()
            .filter(|f| f.is_detailed)
            .map(Cow::Borrowed)
            .collect(),
        BASIC => fields
            .iter()
            .filter(|f| !f.is_detailed)
            .map(Cow::Borrowed)
            .collect(),
        group => {
            let in_group = |detailed: bool| {
                fields
                    .iter()
                    .filter(move |f| f.is_detailed == detailed && f.group == group)
                    .map(Cow::Borrowed)
            };
            in_group(false)
                .chain(std::iter::once(Cow::Owned(Field::separator(group))))
                .chain(in_group(true))
                .collect()
        }
    }
}

/// Keep the fields whose name or value contains `search`, ignoring case.
///
/// An empty term keeps everything.
pub fn filter<'a>(fields: Vec<Cow<'a, Field>>, search: &str) -> Vec<Cow<'a, Field>> {
    if search.is_empty() {
        return fields;
    }
    let needle = search.to_lowercase();
    fields
        .into_iter()
        .filter(|f| f.matches_lowercase(&needle))
        .collect()
}

/// Lay out fields as group blocks in first-encounter order.
///
/// Fields without a group are not rendered.
pub fn format(fields: &[Cow<'_, Field>]) -> String {
    let mut groups: Vec<&str> = Vec::new();
    for field in fields {
        if !field.group.is_empty() && !groups.contains(&field.group.as_str()) {
            groups.push(&field.group);
        }
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(group);
        out.push_str("\n\n");

        for field in fields.iter().filter(|f| f.group == *group) {
            if !field.name.is_empty() {
                let _ = write!(out, "{:<width$}: ", field.name, width = NAME_WIDTH);
            }
            out.push_str(&field.value);
            out.push('\n');
        }
    }
    out
}
