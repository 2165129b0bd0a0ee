use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use twcfg::ContentOptions;
use twcfg::logging::LoggingOptions;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedSettings, SettingSource, validation};
use super::sources::{DEFAULT_DECLARATIONS, discover_declaration};

/// Mirror of the settings file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	declaration: DeclarationSection,
	validation: ValidationSection,
	content: ContentSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DeclarationSection {
	pub(super) path: Option<PathBuf>,
	pub(super) format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ValidationSection {
	pub(super) mode: Option<String>,
	pub(super) require_generic_fallback: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ContentSection {
	pub(super) root: Option<PathBuf>,
	pub(super) include_hidden: Option<bool>,
	pub(super) respect_ignore_files: Option<bool>,
	pub(super) follow_symlinks: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) json: Option<bool>,
}

impl RawSettings {
	/// Apply CLI overrides on top of the raw settings values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.declaration.clone() {
			self.declaration.path = Some(path);
		}
		if let Some(format) = cli.format {
			self.declaration.format = Some(format.as_str().to_string());
		}
		if let Some(mode) = cli.mode {
			self.validation.mode = Some(mode.as_str().to_string());
		}
		if let Some(value) = cli.require_generic_fallback {
			self.validation.require_generic_fallback = Some(value);
		}
		if let Some(root) = cli.root.clone() {
			self.content.root = Some(root);
		}
		if let Some(value) = cli.hidden {
			self.content.include_hidden = Some(value);
		}
		if let Some(value) = cli.respect_ignore_files {
			self.content.respect_ignore_files = Some(value);
		}
		if let Some(value) = cli.follow_symlinks {
			self.content.follow_symlinks = Some(value);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(value) = cli.log_json {
			self.logging.json = Some(value);
		}
	}

	/// Convert the raw settings into [`ResolvedSettings`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedSettings> {
		let sources = ConfigSources {
			declaration_path: detect_source(
				cli.declaration.is_some(),
				self.declaration.path.is_some(),
				"TWCFG__DECLARATION__PATH",
				"DECLARATION",
				"declaration.path",
			),
			declaration_format: detect_source(
				cli.format.is_some(),
				self.declaration.format.is_some(),
				"TWCFG__DECLARATION__FORMAT",
				"--format",
				"declaration.format",
			),
			validation_mode: detect_source(
				cli.mode.is_some(),
				self.validation.mode.is_some(),
				"TWCFG__VALIDATION__MODE",
				"--mode",
				"validation.mode",
			),
			content_root: detect_source(
				cli.root.is_some(),
				self.content.root.is_some(),
				"TWCFG__CONTENT__ROOT",
				"--root",
				"content.root",
			),
			logging_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"TWCFG__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let format = self
			.declaration
			.format
			.as_deref()
			.map(|value| validation::parse_format(value, sources.source_for_format()))
			.transpose()?;

		let mode = match self.validation.mode.as_deref() {
			Some(value) => validation::parse_mode(value, sources.source_for_mode())?,
			None => Default::default(),
		};

		let logging = LoggingOptions {
			level: self
				.logging
				.level
				.unwrap_or_else(|| LoggingOptions::default().level),
			json: self.logging.json.unwrap_or(false),
		};
		validation::validate_log_level(&logging.level, sources.source_for_log_level())?;

		let declaration = match self.declaration.path {
			Some(path) => {
				validation::validate_declaration(&path, sources.source_for_declaration())?;
				path
			}
			None => {
				let cwd = env::current_dir().context("failed to determine working directory")?;
				discover_declaration(&cwd).ok_or_else(|| {
					anyhow!(
						"no declaration found in {}; pass a path or create one of: {}",
						cwd.display(),
						DEFAULT_DECLARATIONS.join(", ")
					)
				})?
			}
		};

		let content_root = match self.content.root {
			Some(root) => {
				validation::validate_content_root(&root, sources.source_for_root())?;
				root
			}
			None => declaration_dir(&declaration)?,
		};

		let defaults = ContentOptions::default();
		let content = ContentOptions {
			include_hidden: self.content.include_hidden.unwrap_or(defaults.include_hidden),
			respect_ignore_files: self
				.content
				.respect_ignore_files
				.unwrap_or(defaults.respect_ignore_files),
			follow_symlinks: self.content.follow_symlinks.unwrap_or(defaults.follow_symlinks),
		};

		Ok(ResolvedSettings {
			declaration,
			format,
			mode,
			require_generic_fallback: self.validation.require_generic_fallback.unwrap_or(false),
			content_root,
			content,
			logging,
		})
	}
}

/// Directory containing the declaration, which content globs are relative to.
fn declaration_dir(declaration: &std::path::Path) -> Result<PathBuf> {
	match declaration.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
		_ => env::current_dir().context("failed to determine working directory"),
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
