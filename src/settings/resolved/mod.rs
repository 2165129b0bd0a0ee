use std::path::PathBuf;

use twcfg::logging::LoggingOptions;
use twcfg::{ContentOptions, Loader, SourceFormat, ValidationMode};

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Tool settings derived from settings files, environment variables, CLI
/// arguments and defaults.
#[derive(Debug)]
pub struct ResolvedSettings {
	pub declaration: PathBuf,
	pub format: Option<SourceFormat>,
	pub mode: ValidationMode,
	pub require_generic_fallback: bool,
	pub content_root: PathBuf,
	pub content: ContentOptions,
	pub logging: LoggingOptions,
}

impl ResolvedSettings {
	/// Build the declaration loader these settings describe.
	pub fn loader(&self) -> Loader {
		Loader::new()
			.mode(self.mode)
			.require_generic_fallback(self.require_generic_fallback)
	}

	/// Print a human readable summary of the effective settings.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
