//! Compilation of value and label formats.
//!
//! Formats are MiniJinja templates rendered with the fields of one line as
//! their only context. Each compiled format owns its own environment so a
//! value format never sees the helpers a label format was compiled with.
//!
//! Environments start out empty: MiniJinja's global functions (`range`,
//! `dict`, `namespace`, ...) are left out so an identifier missing from a line
//! always renders as an empty string. The common text filters are added back.

use std::io::Write;

use log::debug;
use minijinja::{filters, AutoEscape, Environment, UndefinedBehavior};

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::helpers::HelperRegistry;

const FORMAT_TEMPLATE_NAME: &str = "format";

fn add_text_filters(env: &mut Environment<'static>) {
    env.add_filter("lower", filters::lower);
    env.add_filter("upper", filters::upper);
    env.add_filter("title", filters::title);
    env.add_filter("capitalize", filters::capitalize);
    env.add_filter("trim", filters::trim);
    env.add_filter("replace", filters::replace);
    env.add_filter("length", filters::length);
    env.add_filter("default", filters::default);
    env.add_filter("first", filters::first);
    env.add_filter("last", filters::last);
    env.add_filter("join", filters::join);
    env.add_filter("reverse", filters::reverse);
}

/// A compiled value or label format.
#[derive(Debug)]
pub struct FormatProgram {
    env: Environment<'static>,
}

impl FormatProgram {
    fn compile(
        source: &str,
        helpers: Option<&HelperRegistry>,
    ) -> std::result::Result<Self, minijinja::Error> {
        let mut env = Environment::empty();
        // Fields missing from a line render as empty strings.
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        add_text_filters(&mut env);

        if let Some(helpers) = helpers {
            helpers.install(&mut env);
        }

        env.add_template_owned(FORMAT_TEMPLATE_NAME, source.to_string())?;

        Ok(Self { env })
    }

    /// Writes the untrimmed output of this format for `fields` into `output`.
    pub(crate) fn write_into<W: Write>(
        &self,
        fields: &FieldMap,
        output: W,
    ) -> std::result::Result<(), minijinja::Error> {
        let template = self.env.get_template(FORMAT_TEMPLATE_NAME)?;
        template.render_to_write(fields, output)?;
        Ok(())
    }
}

/// Compiles a value format. Value formats have no access to helper functions.
///
/// # Errors
///
/// Returns [`Error::ValueFormatSyntax`] if `value_format` is not a valid template.
pub fn compile_value_format(value_format: &str) -> Result<FormatProgram> {
    debug!("Compiling value format `{value_format}`");
    FormatProgram::compile(value_format, None).map_err(Error::ValueFormatSyntax)
}

/// Compiles a label format with every helper of `helpers` callable from it.
///
/// # Errors
///
/// Returns [`Error::LabelFormatSyntax`] if `label_format` is not a valid template.
pub fn compile_label_format(label_format: &str, helpers: &HelperRegistry) -> Result<FormatProgram> {
    debug!(
        "Compiling label format `{label_format}` with {} helper(s)",
        helpers.len()
    );
    FormatProgram::compile(label_format, Some(helpers)).map_err(Error::LabelFormatSyntax)
}
