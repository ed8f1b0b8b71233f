//! Summary text parser.
//!
//! A summary is a block of lines separated by `\r` and/or `\n`. Lines that
//! contain a colon are fields, split at the first colon into name and value.
//! Every other non-empty line is a group heading that applies to the fields
//! after it. Parsing never fails: odd lines become headings or fields with an
//! empty name.

use crate::field::{Detail, Field};

/// Parse one summary into fields, in source order.
///
/// Fields seen before the first heading carry an empty group.
pub fn parse(raw: &str, detail: Detail) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut group = String::new();

    for line in raw.split(['\r', '\n']).filter(|l| !l.is_empty()) {
        match line.split_once(':') {
            Some((name, value)) => {
                fields.push(Field::new(name.trim(), value.trim(), group.as_str(), detail));
            }
            None => group = line.trim().to_string(),
        }
    }

    fields
}
