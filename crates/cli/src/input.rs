//! Reading command output and writing menu entries.

use std::fs;
use std::io::{stdin, Read, Write};

use cmd_menu_core::config::expand_input_path;
use cmd_menu_core::error::{Error, Result};
use log::debug;

/// Reads the command output from `input_path`, or from standard input when no
/// path is given.
///
/// # Errors
///
/// Returns an error if the file or standard input cannot be read.
pub fn read_command_output(input_path: Option<&str>) -> Result<String> {
    match expand_input_path(input_path) {
        Some(path) => {
            debug!("Reading command output from `{path}`");
            fs::read_to_string(&path)
                .map_err(|e| Error::io_error("command output".to_string(), path, e))
        }
        None => {
            debug!("Reading command output from standard input");
            let mut output = String::new();
            stdin().read_to_string(&mut output)?;
            Ok(output)
        }
    }
}

/// Writes each line followed by a newline.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}
