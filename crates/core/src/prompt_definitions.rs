use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generator::{MenuEntry, MenuGenerator};
use crate::helpers::HelperRegistry;

/// A named menu configuration: how to turn one command's output into entries.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDefinition {
    pub key: String,
    pub title: Option<String>,
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub value_format: String,
    #[serde(default)]
    pub label_format: String,
}

impl PromptDefinition {
    /// Returns a copy with every `Some` override replacing the matching field.
    pub fn with_overrides(
        &self,
        filter: Option<&str>,
        value_format: Option<&str>,
        label_format: Option<&str>,
    ) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            filter: filter.map_or_else(|| self.filter.clone(), str::to_string),
            value_format: value_format.map_or_else(|| self.value_format.clone(), str::to_string),
            label_format: label_format.map_or_else(|| self.label_format.clone(), str::to_string),
        }
    }

    /// Compiles this definition's filter and formats.
    ///
    /// # Errors
    ///
    /// Returns the compile error of the first invalid filter or format.
    pub fn compile(&self, helpers: &HelperRegistry) -> Result<MenuGenerator> {
        MenuGenerator::compile(
            &self.filter,
            &self.value_format,
            &self.label_format,
            helpers,
        )
    }

    /// Builds the menu entries for `output` with this definition.
    ///
    /// # Errors
    ///
    /// Returns a compile error or the render error of the first failing line.
    pub fn generate(&self, output: &str, helpers: &HelperRegistry) -> Result<Vec<MenuEntry>> {
        self.compile(helpers)?.entries(output)
    }
}

impl Display for PromptDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(formatter, "{} ({})", self.key, title),
            None => formatter.write_str(&self.key),
        }
    }
}
