//! cmd-menu CLI Library
//!
//! This crate provides the command-line host for cmd-menu. It reads the output
//! of some command, turns it into menu entries with a prompt definition and
//! prints one line per entry.
//!
//! # Key Features
//!
//! - **Prompt Definitions**: Named filter/format configurations from a YAML file
//! - **Command-line Formats**: Filter and formats given directly as flags, or overriding a prompt
//! - **Styling Helpers**: Colour and attribute helpers for label formats
//! - **Output Templates**: Entries printed through a `{value}\t{label}` style template
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and prompt resolution
//! - [`styles`]: The styling helper registry handed to label formats
//! - [`input`]: Reading command output and writing entries
//!
//! # Examples
//!
//! ```bash
//! # Show the output lines as they are
//! git branch --format='%(refname:short)' | cm
//!
//! # Extract fields and build value and label separately
//! git log --oneline | cm -f '^(?P<sha>\S+) (?P<subject>.*)$' -v '{{ sha }}' -l '{{ yellow(sha) }} {{ subject }}'
//!
//! # Use a prompt from ~/.cmd-menu/prompts.yml
//! git branch -r | cm -p remote-branches
//!
//! # List configured prompts
//! cm --list
//! ```

pub mod cli_args;
pub mod input;
pub mod styles;
