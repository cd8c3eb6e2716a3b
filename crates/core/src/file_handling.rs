//! Reading and validation of prompt definition files.
//!
//! A prompt definition file is a YAML list of [`PromptDefinition`]s. Keys must
//! be non-empty, free of spaces and unique within the file.

use std::collections::HashSet;
use std::fs::File;

use indexmap::IndexMap;
use log::info;

use crate::error::Error::{EmptyKey, KeyWithSpace, NonUniquePromptKey};
use crate::error::{Error, Result};
use crate::prompt_definitions::PromptDefinition;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(EmptyKey);
    }

    if key.contains(' ') {
        return Err(KeyWithSpace(key.to_string()));
    }

    Ok(())
}

fn validate_prompt_keys(prompts: &[PromptDefinition]) -> Result<()> {
    let mut keys = HashSet::new();

    for prompt in prompts {
        validate_key(&prompt.key)?;

        if !keys.insert(prompt.key.as_str()) {
            return Err(NonUniquePromptKey(prompt.key.clone()));
        }
    }

    Ok(())
}

/// Loads and validates prompt definitions from a YAML file.
///
/// The returned map is keyed by prompt key and keeps the order of the file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file defines no prompts
/// - A prompt key is empty, contains a space or is not unique
///
/// # Examples
///
/// ```no_run
/// use cmd_menu_core::file_handling::get_prompt_definitions;
///
/// let prompts = get_prompt_definitions("/home/me/.cmd-menu/prompts.yml")?;
/// for prompt in prompts.values() {
///     println!("Prompt: {}", prompt);
/// }
/// # Ok::<(), cmd_menu_core::error::Error>(())
/// ```
pub fn get_prompt_definitions(config_path: &str) -> Result<IndexMap<String, PromptDefinition>> {
    let config_reader = get_reader("config", config_path)?;

    let parsed_prompt_defs: Vec<PromptDefinition> = serde_yaml::from_reader(config_reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    if parsed_prompt_defs.is_empty() {
        return Err(Error::empty_prompt_definition(config_path.to_string()));
    }

    validate_prompt_keys(&parsed_prompt_defs)?;

    info!(
        "Loaded {} prompt definition(s) from `{}`",
        parsed_prompt_defs.len(),
        config_path
    );

    Ok(parsed_prompt_defs
        .into_iter()
        .map(|prompt| (prompt.key.clone(), prompt))
        .collect())
}

/// Looks up the prompt stored under `key`.
///
/// # Errors
///
/// Returns [`Error::PromptNotFound`] if no prompt uses `key`.
pub fn find_prompt<'a>(
    prompts: &'a IndexMap<String, PromptDefinition>,
    key: &str,
) -> Result<&'a PromptDefinition> {
    prompts
        .get(key)
        .ok_or_else(|| Error::PromptNotFound(key.to_string()))
}
