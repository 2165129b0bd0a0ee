use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use twcfg::Configuration;

/// Render a human readable summary of a loaded configuration.
pub(crate) fn format_plain(config: &Configuration) -> String {
	let mut out = String::new();

	let _ = writeln!(out, "Content:");
	for pattern in config.content() {
		let _ = writeln!(out, "  {pattern}");
	}

	let _ = writeln!(out, "Font families:");
	if config.font_family().is_empty() {
		let _ = writeln!(out, "  (none)");
	}
	for (role, stack) in config.font_family().iter() {
		let _ = writeln!(out, "  {role}: {}", stack.families().join(", "));
	}

	let _ = writeln!(out, "Colors:");
	if config.colors().is_empty() {
		let _ = writeln!(out, "  (none)");
	}
	let width = config.colors().names().map(str::len).max().unwrap_or(0);
	for token in config.colors().iter() {
		let _ = writeln!(out, "  {:width$}  {}", token.name, token.value);
	}

	if config.plugins().is_empty() {
		let _ = writeln!(out, "Plugins: (none)");
	} else {
		let _ = writeln!(out, "Plugins:");
		for plugin in config.plugins() {
			match plugin.options() {
				Some(options) => {
					let _ = writeln!(out, "  {} {options}", plugin.name());
				}
				None => {
					let _ = writeln!(out, "  {}", plugin.name());
				}
			}
		}
	}

	out
}

/// Print the plain-text summary of a configuration.
pub(crate) fn print_plain(config: &Configuration) {
	print!("{}", format_plain(config));
}

/// Print the configuration serialized back to its declaration shape.
pub(crate) fn print_json(config: &Configuration) -> Result<()> {
	println!("{}", config.to_json()?);
	Ok(())
}

/// Print resolved content files, one per line.
pub(crate) fn print_files(files: &[PathBuf], format: super::OutputFormat) -> Result<()> {
	match format {
		super::OutputFormat::Plain => {
			for file in files {
				println!("{}", file.display());
			}
		}
		super::OutputFormat::Json => {
			let paths: Vec<String> = files
				.iter()
				.map(|file| file.display().to_string())
				.collect();
			println!("{}", serde_json::to_string_pretty(&paths)?);
		}
	}
	Ok(())
}
