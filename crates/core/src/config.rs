//! Configuration path utilities for cmd-menu.
//!
//! This module resolves the prompt definitions file path, expanding shell
//! shortcuts like `~`.

/// Default path for the prompt definitions file
pub const DEFAULT_CONFIG_PATH: &str = "~/.cmd-menu/prompts.yml";

/// Default template used to print each menu entry
pub const DEFAULT_OUTPUT_FORMAT: &str = "{value}\t{label}";

/// Resolves the prompt definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmd_menu_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(None);
///
/// // Use custom path
/// let custom_path = get_config_path(Some("/path/to/prompts.yml"));
/// assert_eq!(custom_path, "/path/to/prompts.yml");
/// ```
pub fn get_config_path(config_path_arg: Option<&str>) -> String {
    let config_path = config_path_arg.unwrap_or(DEFAULT_CONFIG_PATH);

    shellexpand::tilde(config_path).to_string()
}

/// Expands shell variables like `~` in an input file path.
pub fn expand_input_path(input_path: Option<&str>) -> Option<String> {
    input_path.map(|path| shellexpand::tilde(path).to_string())
}
