//! Rendering compiled formats into trimmed strings.

use crate::fields::FieldMap;
use crate::format::FormatProgram;

/// Renders compiled formats and trims the result.
///
/// The scratch buffer is reused between renders and cleared before each one.
/// A renderer belongs to a single generation run and is never shared.
#[derive(Debug, Default)]
pub struct TrimmingRenderer {
    buffer: Vec<u8>,
}

impl TrimmingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `program` with `fields` as its only context, stripping leading and
    /// trailing whitespace from the output.
    ///
    /// # Errors
    ///
    /// Returns the engine error if rendering fails at runtime, for example when
    /// the program calls a helper that was never registered.
    pub fn render(
        &mut self,
        program: &FormatProgram,
        fields: &FieldMap,
    ) -> std::result::Result<String, minijinja::Error> {
        self.buffer.clear();
        program.write_into(fields, &mut self.buffer)?;

        Ok(String::from_utf8_lossy(&self.buffer).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::compile_value_format;

    #[test]
    fn test_render_trims_whitespace() {
        let program = compile_value_format(" \t{{ group_0 }}\n\n").unwrap();

        let mut fields = FieldMap::new();
        fields.insert("group_0", "  padded  ");

        let mut renderer = TrimmingRenderer::new();
        assert_eq!(renderer.render(&program, &fields).unwrap(), "padded");
    }

    #[test]
    fn test_render_resets_buffer_between_calls() {
        let program = compile_value_format("{{ group_0 }}").unwrap();
        let mut renderer = TrimmingRenderer::new();

        let mut first = FieldMap::new();
        first.insert("group_0", "a much longer first value");
        let mut second = FieldMap::new();
        second.insert("group_0", "short");

        assert_eq!(
            renderer.render(&program, &first).unwrap(),
            "a much longer first value"
        );
        assert_eq!(renderer.render(&program, &second).unwrap(), "short");
    }

    #[test]
    fn test_render_keeps_inner_whitespace() {
        let program = compile_value_format("{{ group_1 }}   {{ group_2 }}").unwrap();

        let mut fields = FieldMap::new();
        fields.insert("group_1", "left");
        fields.insert("group_2", "right");

        let mut renderer = TrimmingRenderer::new();
        assert_eq!(renderer.render(&program, &fields).unwrap(), "left   right");
    }

    #[test]
    fn test_render_unknown_function_fails() {
        let program = compile_value_format("{{ missing_helper(group_0) }}").unwrap();

        let mut renderer = TrimmingRenderer::new();
        assert!(renderer.render(&program, &FieldMap::new()).is_err());
    }
}
