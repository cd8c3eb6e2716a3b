use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use cmd_menu_core::config::get_config_path;
use cmd_menu_core::error::Result;
use cmd_menu_core::file_handling::get_prompt_definitions;
use cmd_menu_core::interpolation::{get_output_template, interpolate_entries};
use itertools::Itertools;
use log::{debug, info};

use cmd_menu_cli::cli_args::Args;
use cmd_menu_cli::input::{read_command_output, write_lines};
use cmd_menu_cli::styles::style_helpers;

/// Print the configured prompts in file order
fn list_prompts(args: &Args) -> Result<()> {
    let config_path = get_config_path(args.config_path.as_deref());
    let prompts = get_prompt_definitions(&config_path)?;

    println!("{}", prompts.values().map(ToString::to_string).join("\n"));
    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    if args.list {
        return list_prompts(&args);
    }

    let prompt = args.prompt_definition()?;
    info!("Generating menu with prompt {}", prompt);

    let helpers = style_helpers(args.use_color());
    debug!("Label helpers: {}", helpers.names().join(", "));

    // Everything is compiled before any input is read
    let generator = prompt.compile(&helpers)?;
    let output_template = get_output_template(&args.output_format)?;

    let command_output = read_command_output(args.input.as_deref())?;
    let entries = generator.entries(&command_output)?;
    let lines = interpolate_entries(&output_template, &entries)?;

    write_lines(stdout().lock(), &lines)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
