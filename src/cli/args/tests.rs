use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, FormatArg, ModeArg, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["twcfg"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.declaration.is_none());
	assert!(!parsed.list_files);
}

#[test]
fn flags_and_positional_declaration_are_parsed() {
	let parsed = CliArgs::parse_from([
		"twcfg",
		"styles/tailwind.config.toml",
		"--format",
		"toml",
		"--mode",
		"permissive",
		"--require-generic-fallback",
		"yes",
		"--hidden",
		"true",
		"--output",
		"json",
		"--list-files",
	]);

	assert_eq!(
		parsed.declaration,
		Some(PathBuf::from("styles/tailwind.config.toml"))
	);
	assert_eq!(parsed.format, Some(FormatArg::Toml));
	assert_eq!(parsed.mode, Some(ModeArg::Permissive));
	assert_eq!(parsed.require_generic_fallback, Some(true));
	assert_eq!(parsed.hidden, Some(true));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert!(parsed.list_files);
}
