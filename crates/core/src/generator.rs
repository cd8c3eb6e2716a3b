//! Turning command output into menu entries.
//!
//! Every non-empty line of the output becomes one [`MenuEntry`]. With no filter
//! and no formats configured lines pass through as they are; otherwise the
//! filter extracts fields from each line and the value and label formats are
//! rendered from them.
//!
//! Generation is all-or-nothing: the first error ends the run and no entries
//! are returned.
//!
//! # Examples
//!
//! ```
//! use cmd_menu_core::generator::{generate, MenuEntry};
//! use cmd_menu_core::helpers::HelperRegistry;
//!
//! let entries = generate(
//!     "a1\nb2",
//!     "(?P<num>[0-9]+)",
//!     "{{ num }}",
//!     "",
//!     &HelperRegistry::new(),
//! )?;
//!
//! assert_eq!(entries, vec![MenuEntry::new("1", "1"), MenuEntry::new("2", "2")]);
//! # Ok::<(), cmd_menu_core::error::Error>(())
//! ```

use std::fmt::{Display, Formatter};

use log::{debug, warn};
use minijinja::ErrorKind;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::fields::extract;
use crate::format::{compile_label_format, compile_value_format, FormatProgram};
use crate::helpers::HelperRegistry;
use crate::renderer::TrimmingRenderer;

/// One selectable menu item.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub value: String,
    pub label: String,
}

impl MenuEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn identity(line: &str) -> Self {
        Self::new(line, line)
    }
}

impl Display for MenuEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value == self.label {
            formatter.write_str(&self.label)
        } else {
            write!(formatter, "{} ({})", self.label, self.value)
        }
    }
}

/// A filter and formats compiled once and applied to every line.
#[derive(Debug)]
pub enum MenuGenerator {
    /// Lines are used verbatim as both value and label.
    Identity,
    Templated {
        filter: Regex,
        value: FormatProgram,
        /// `None` when no label format was given; the value program is used instead.
        label: Option<FormatProgram>,
    },
}

impl MenuGenerator {
    /// Compiles the filter and both formats.
    ///
    /// When all three are empty the result is [`MenuGenerator::Identity`]. Helpers
    /// are only made available to the label format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterSyntax`], [`Error::ValueFormatSyntax`] or
    /// [`Error::LabelFormatSyntax`] for whichever input failed to compile. A
    /// label format is also rejected when a named group of the filter uses the
    /// name of one of the helpers.
    pub fn compile(
        filter: &str,
        value_format: &str,
        label_format: &str,
        helpers: &HelperRegistry,
    ) -> Result<Self> {
        if filter.is_empty() && value_format.is_empty() && label_format.is_empty() {
            debug!("No filter or formats configured, showing output lines as-is");
            return Ok(Self::Identity);
        }

        let filter = Regex::new(filter).map_err(Error::FilterSyntax)?;
        let value = compile_value_format(value_format)?;
        let label = if label_format.is_empty() {
            None
        } else {
            reject_helper_named_groups(&filter, helpers)?;
            Some(compile_label_format(label_format, helpers)?)
        };

        debug!(
            "Compiled menu generator with filter `{}` ({} capture group(s))",
            filter.as_str(),
            filter.captures_len()
        );

        Ok(Self::Templated {
            filter,
            value,
            label,
        })
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Builds one entry per non-empty line of `output`, in order.
    ///
    /// Lines holding only whitespace are kept and handed to the filter untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for the first line whose value or label fails to
    /// render. Entries built for earlier lines are dropped.
    pub fn entries(&self, output: &str) -> Result<Vec<MenuEntry>> {
        let lines = output.split('\n').filter(|line| !line.is_empty());

        let entries: Vec<MenuEntry> = match self {
            Self::Identity => lines.map(MenuEntry::identity).collect(),
            Self::Templated {
                filter,
                value,
                label,
            } => {
                let label = label.as_ref().unwrap_or(value);
                let mut renderer = TrimmingRenderer::new();
                let mut entries = Vec::new();
                let mut unmatched = 0usize;

                for line in lines {
                    let fields = extract(line, filter);
                    if fields.is_empty() {
                        unmatched += 1;
                    }

                    let entry_value = renderer
                        .render(value, &fields)
                        .map_err(|e| Error::render_error(line, e))?;
                    let entry_label = renderer
                        .render(label, &fields)
                        .map_err(|e| Error::render_error(line, e))?;

                    entries.push(MenuEntry::new(entry_value, entry_label));
                }

                if unmatched > 0 && unmatched == entries.len() {
                    warn!(
                        "Filter `{}` did not match any of the {} line(s)",
                        filter.as_str(),
                        unmatched
                    );
                }

                entries
            }
        };

        Ok(entries)
    }
}

/// A named group sharing a helper's name would hide that helper from the label format.
fn reject_helper_named_groups(filter: &Regex, helpers: &HelperRegistry) -> Result<()> {
    match filter
        .capture_names()
        .flatten()
        .find(|name| helpers.contains(name))
    {
        Some(name) => Err(Error::LabelFormatSyntax(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("capture group `{name}` has the same name as a label helper"),
        ))),
        None => Ok(()),
    }
}

/// Compiles the configuration and builds the menu entries for `output` in one go.
///
/// # Errors
///
/// Returns the compile error for an invalid filter or format before looking at
/// any line, or the render error of the first failing line. No entries are
/// returned in either case.
pub fn generate(
    output: &str,
    filter: &str,
    value_format: &str,
    label_format: &str,
    helpers: &HelperRegistry,
) -> Result<Vec<MenuEntry>> {
    let generator = MenuGenerator::compile(filter, value_format, label_format, helpers)?;
    let entries = generator.entries(output)?;
    debug!("Generated {} menu entries", entries.len());
    Ok(entries)
}
