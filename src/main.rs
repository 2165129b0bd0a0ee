mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_files, print_json, print_plain};
use settings::ResolvedSettings;
use tracing::info;
use twcfg::{Configuration, logging, resolve_content_files};

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	logging::initialize(&resolved.logging)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let configuration = load_declaration(&resolved)?;

	if cli.list_files {
		return list_files(cli.output, &resolved, &configuration);
	}

	match cli.output {
		OutputFormat::Plain => print_plain(&configuration),
		OutputFormat::Json => print_json(&configuration)?,
	}

	Ok(())
}

/// Load and validate the declaration the settings point at.
fn load_declaration(settings: &ResolvedSettings) -> Result<Configuration> {
	let configuration = settings
		.loader()
		.load_file(&settings.declaration, settings.format)
		.with_context(|| format!("{} is not a valid declaration", settings.declaration.display()))?;

	info!(
		declaration = %settings.declaration.display(),
		colors = configuration.colors().len(),
		"declaration loaded"
	);

	Ok(configuration)
}

/// Print the files the declaration's content globs select.
fn list_files(
	format: OutputFormat,
	settings: &ResolvedSettings,
	configuration: &Configuration,
) -> Result<()> {
	let files = resolve_content_files(
		&settings.content_root,
		configuration.content(),
		&settings.content,
	)?;
	print_files(&files, format)
}
