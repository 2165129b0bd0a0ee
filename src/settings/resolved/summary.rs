use std::fmt::Write;

use super::ResolvedSettings;

pub(super) fn format_summary(settings: &ResolvedSettings) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective settings:");
	let _ = writeln!(out, "  Declaration: {}", settings.declaration.display());
	let _ = writeln!(
		out,
		"  Format: {}",
		settings
			.format
			.map(|format| format.as_str().to_string())
			.unwrap_or_else(|| "(from extension)".to_string())
	);
	let _ = writeln!(out, "  Validation mode: {:?}", settings.mode);
	let _ = writeln!(
		out,
		"  Require generic fallback: {}",
		bool_to_word(settings.require_generic_fallback)
	);
	let _ = writeln!(out, "  Content root: {}", settings.content_root.display());
	let _ = writeln!(
		out,
		"  Include hidden: {}",
		bool_to_word(settings.content.include_hidden)
	);
	let _ = writeln!(
		out,
		"  Respect ignore files: {}",
		bool_to_word(settings.content.respect_ignore_files)
	);
	let _ = writeln!(
		out,
		"  Follow symlinks: {}",
		bool_to_word(settings.content.follow_symlinks)
	);
	let _ = writeln!(out, "  Log level: {}", settings.logging.level);
	let _ = writeln!(out, "  JSON logs: {}", bool_to_word(settings.logging.json));
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use twcfg::logging::LoggingOptions;
	use twcfg::{ContentOptions, SourceFormat, ValidationMode};

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_resolved_values() {
		let settings = ResolvedSettings {
			declaration: PathBuf::from("/srv/site/tailwind.config.toml"),
			format: Some(SourceFormat::Toml),
			mode: ValidationMode::Permissive,
			require_generic_fallback: true,
			content_root: PathBuf::from("/srv/site"),
			content: ContentOptions::default(),
			logging: LoggingOptions::default(),
		};

		let summary = format_summary(&settings);

		assert!(summary.contains("Declaration: /srv/site/tailwind.config.toml"));
		assert!(summary.contains("Format: toml"));
		assert!(summary.contains("Validation mode: Permissive"));
		assert!(summary.contains("Require generic fallback: yes"));
		assert!(summary.contains("Include hidden: no"));
		assert!(summary.contains("Log level: warn"));
	}
}
