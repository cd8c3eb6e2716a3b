//! Field extraction from a single line of command output.
//!
//! A filter regex is applied to a line and every capture group of the first
//! match is recorded twice over: positionally as `group_<N>` and, when the
//! group declares one, under its name.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

/// Prefix of positional field identifiers, `group_0` being the whole match.
pub const GROUP_PREFIX: &str = "group_";

/// Captured fields of one line, keyed by field identifier.
///
/// Looking up an identifier that is not present yields the empty string.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(identifier.into(), text.into());
    }

    pub fn get(&self, identifier: &str) -> &str {
        self.fields.get(identifier).map_or("", String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.fields.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Extracts the fields of `line` using the first match of `filter`.
///
/// Matches after the first one are ignored. A line that does not match at all
/// produces an empty [`FieldMap`].
pub fn extract(line: &str, filter: &Regex) -> FieldMap {
    let mut fields = FieldMap::new();

    let Some(captures) = filter.captures(line) else {
        return fields;
    };

    for (index, name) in filter.capture_names().enumerate() {
        let text = captures.get(index).map_or("", |group| group.as_str());

        fields.insert(format!("{GROUP_PREFIX}{index}"), text);

        if let Some(name) = name {
            fields.insert(name, text);
        }
    }

    fields
}
