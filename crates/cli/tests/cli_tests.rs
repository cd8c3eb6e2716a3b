//! End-to-end tests for the cmd-menu CLI library: from arguments and command
//! output to the printed lines.

use clap::Parser;
use cmd_menu_cli::cli_args::Args;
use cmd_menu_cli::input::{read_command_output, write_lines};
use cmd_menu_cli::styles::style_helpers;
use cmd_menu_core::error::Error;
use cmd_menu_core::interpolation::{get_output_template, interpolate_entries};
use std::io::Write;
use tempfile::NamedTempFile;

fn run(args: &Args, command_output: &str) -> Result<String, Error> {
    let prompt = args.prompt_definition()?;
    let helpers = style_helpers(args.use_color());
    let generator = prompt.compile(&helpers)?;
    let template = get_output_template(&args.output_format)?;

    let entries = generator.entries(command_output)?;
    let lines = interpolate_entries(&template, &entries)?;

    let mut printed = Vec::new();
    write_lines(&mut printed, &lines)?;
    Ok(String::from_utf8(printed).unwrap())
}

#[test]
fn test_identity_output() {
    let args = Args::parse_from(["cm"]);
    let printed = run(&args, "main\ndev\n").unwrap();
    assert_eq!(printed, "main\tmain\ndev\tdev\n");
}

#[test]
fn test_flags_with_styled_label_without_color() {
    let args = Args::parse_from([
        "cm",
        "--no-color",
        "-f",
        r"^(?P<sha>[0-9a-f]+) (?P<subject>.*)$",
        "-v",
        "{{ sha }}",
        "-l",
        "{{ yellow(sha) }} {{ subject | bold }}",
        "-o",
        "{index}:{value}:{label}",
    ]);

    let printed = run(&args, "abc123 First commit\ndef456 Second commit").unwrap();
    assert_eq!(
        printed,
        "0:abc123:abc123 First commit\n1:def456:def456 Second commit\n"
    );
}

#[test]
fn test_prompt_from_config_file_and_input_file() {
    let mut config = NamedTempFile::new().unwrap();
    write!(
        config,
        r#"
- key: "remote-branches"
  title: "Remote branches"
  filter: '^\s*(?P<remote>[^/\s]+)/(?P<branch>\S+)'
  value_format: "{{{{ remote }}}}/{{{{ branch }}}}"
  label_format: "{{{{ branch }}}} ({{{{ cyan(remote) }}}})"
"#
    )
    .unwrap();

    let mut input = NamedTempFile::new().unwrap();
    write!(input, "  origin/main\n\n  upstream/feature/menus\n").unwrap();

    let args = Args::parse_from([
        "cm",
        "--no-color",
        "-c",
        config.path().to_str().unwrap(),
        "-p",
        "remote-branches",
        "-i",
        input.path().to_str().unwrap(),
    ]);

    let command_output = read_command_output(args.input.as_deref()).unwrap();
    let printed = run(&args, &command_output).unwrap();
    assert_eq!(
        printed,
        "origin/main\tmain (origin)\nupstream/feature/menus\tfeature/menus (upstream)\n"
    );
}

#[test]
fn test_invalid_filter_prints_nothing() {
    let args = Args::parse_from(["cm", "-f", "(?P<broken", "-v", "{{ group_0 }}"]);
    let result = run(&args, "a\nb");
    assert!(matches!(result, Err(Error::FilterSyntax(_))));
}

#[test]
fn test_unknown_helper_fails_whole_menu() {
    let args = Args::parse_from(["cm", "-f", "(.+)", "-l", "{{ sparkle(group_1) }}"]);
    let result = run(&args, "a\nb");
    assert!(matches!(result, Err(Error::Render { .. })));
}

#[test]
fn test_unknown_output_key_rejected() {
    let args = Args::parse_from(["cm", "-o", "{value} {nope}"]);
    let result = run(&args, "a");
    assert!(matches!(result, Err(Error::UnknownOutputKey(_))));
}
