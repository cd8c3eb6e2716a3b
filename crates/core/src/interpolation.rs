//! Interpolation of menu entries into the host's output format.
//!
//! The output format is a `leon` template such as `{value}\t{label}`; the keys
//! `value`, `label` and `index` are available.

use std::collections::HashMap;

use leon::Template;

use crate::error::{Error, Result};
use crate::generator::MenuEntry;

const OUTPUT_KEYS: [&str; 3] = ["value", "label", "index"];

/// Parses `output_format`, rejecting keys other than `value`, `label` and `index`.
///
/// # Errors
///
/// Returns [`Error::OutputFormatParse`] for malformed templates and
/// [`Error::UnknownOutputKey`] for unsupported keys.
pub fn get_output_template(output_format: &str) -> Result<Template<'_>> {
    let template = Template::parse(output_format)?;

    let unknown_key = template
        .keys()
        .map(|key| key.to_string())
        .find(|key| !OUTPUT_KEYS.contains(&key.as_str()));

    if let Some(key) = unknown_key {
        return Err(Error::UnknownOutputKey(key));
    }

    Ok(template)
}

/// Renders one output line per entry.
///
/// # Errors
///
/// Returns [`Error::OutputFormatRender`] if interpolation fails.
pub fn interpolate_entries(template: &Template, entries: &[MenuEntry]) -> Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let context: HashMap<String, String> = HashMap::from([
            ("value".to_string(), entry.value.clone()),
            ("label".to_string(), entry.label.clone()),
            ("index".to_string(), index.to_string()),
        ]);

        lines.push(template.render(&context)?);
    }

    Ok(lines)
}
