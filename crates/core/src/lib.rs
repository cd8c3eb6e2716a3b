//! cmd-menu Core Library
//!
//! This crate turns the line-oriented output of an arbitrary command into an
//! ordered list of menu entries, each carrying a machine-usable value and a
//! human-readable label.
//!
//! # Key Features
//!
//! - **Field Extraction**: A filter regex captures positional (`group_N`) and named fields per line
//! - **Value and Label Formats**: MiniJinja templates build each entry from the captured fields
//! - **Host Helpers**: Label formats can call helper functions supplied by the host, such as styling
//! - **All-or-nothing Generation**: Any error discards the whole menu
//! - **Prompt Definitions**: Named filter/format configurations loaded from YAML
//!
//! # Examples
//!
//! ```
//! use cmd_menu_core::generator::generate;
//! use cmd_menu_core::helpers::HelperRegistry;
//!
//! let mut helpers = HelperRegistry::new();
//! helpers.register("upper", |text| text.to_uppercase());
//!
//! let entries = generate(
//!     "* main\n  feature/menus",
//!     r"^[* ] (?P<branch>\S+)$",
//!     "{{ branch }}",
//!     "{{ upper(branch) }}",
//!     &helpers,
//! )?;
//!
//! assert_eq!(entries[1].value, "feature/menus");
//! assert_eq!(entries[1].label, "FEATURE/MENUS");
//! # Ok::<(), cmd_menu_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod file_handling;
pub mod format;
pub mod generator;
pub mod helpers;
pub mod interpolation;
pub mod prompt_definitions;
pub mod renderer;
