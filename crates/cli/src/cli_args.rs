//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure with `clap` and
//! resolves the arguments into the [`PromptDefinition`] to generate with.

use clap::Parser;
use cmd_menu_core::config::{get_config_path, DEFAULT_OUTPUT_FORMAT};
use cmd_menu_core::error::{Error, Result};
use cmd_menu_core::file_handling::{find_prompt, get_prompt_definitions};
use cmd_menu_core::prompt_definitions::PromptDefinition;
use log::debug;

/// Key given to prompts assembled purely from command-line flags.
pub const COMMAND_LINE_PROMPT_KEY: &str = "command-line";

/// Command-line arguments for the `cm` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmd_menu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cm", "--filter", "(?P<num>[0-9]+)", "-v", "{{ num }}"]);
/// assert_eq!(args.filter.as_deref(), Some("(?P<num>[0-9]+)"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the prompt definitions config file YAML.
    ///
    /// If not provided, defaults to `~/.cmd-menu/prompts.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Key of the prompt definition to use from the config file.
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,

    /// Regular expression applied to every line; only its first match is used.
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Template producing each entry's value from the captured fields.
    #[arg(long, short = 'v')]
    pub value_format: Option<String>,

    /// Template producing each entry's label; may use the styling helpers.
    ///
    /// Defaults to the value format.
    #[arg(long, short = 'l')]
    pub label_format: Option<String>,

    /// File holding the command output. Reads standard input when omitted.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Template for each printed entry, with the keys `value`, `label` and `index`.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FORMAT)]
    pub output_format: String,

    /// Register the styling helpers without any styling.
    ///
    /// Also enabled when the `NO_COLOR` environment variable is set.
    #[arg(long, action)]
    pub no_color: bool,

    /// List the prompts of the config file and exit.
    #[arg(long, action)]
    pub list: bool,
}

impl Args {
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    fn has_format_flags(&self) -> bool {
        self.filter.is_some() || self.value_format.is_some() || self.label_format.is_some()
    }

    /// Resolves the prompt to generate with.
    ///
    /// With `--prompt` the definition is read from the config file and any of
    /// `--filter`, `--value-format` and `--label-format` override its fields.
    /// Without it the prompt is built from those flags alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded, the prompt key is
    /// unknown, or a config path is given without a prompt key or format flags.
    pub fn prompt_definition(&self) -> Result<PromptDefinition> {
        let Some(prompt_key) = &self.prompt else {
            if let Some(config_path) = &self.config_path {
                if !self.has_format_flags() {
                    return Err(Error::MissingPromptConfiguration(config_path.clone()));
                }
            }

            return Ok(PromptDefinition {
                key: COMMAND_LINE_PROMPT_KEY.to_string(),
                title: None,
                filter: self.filter.clone().unwrap_or_default(),
                value_format: self.value_format.clone().unwrap_or_default(),
                label_format: self.label_format.clone().unwrap_or_default(),
            });
        };

        let config_path = get_config_path(self.config_path.as_deref());
        debug!("Config path: `{}`", config_path);

        let prompts = get_prompt_definitions(&config_path)?;
        let prompt = find_prompt(&prompts, prompt_key)?;

        Ok(prompt.with_overrides(
            self.filter.as_deref(),
            self.value_format.as_deref(),
            self.label_format.as_deref(),
        ))
    }
}
