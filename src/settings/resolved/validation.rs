use std::path::Path;

use twcfg::logging::{LEVELS, is_valid_level};
use twcfg::{SourceFormat, ValidationMode};

use super::{ConfigError, SettingSource};

pub(crate) fn parse_format(value: &str, origin: SettingSource) -> Result<SourceFormat, ConfigError> {
	value.parse().map_err(|_| {
		ConfigError::invalid(
			"declaration.format",
			value,
			origin,
			"expected `json` or `toml`",
		)
	})
}

pub(crate) fn parse_mode(value: &str, origin: SettingSource) -> Result<ValidationMode, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"strict" => Ok(ValidationMode::Strict),
		"permissive" => Ok(ValidationMode::Permissive),
		_ => Err(ConfigError::invalid(
			"validation.mode",
			value,
			origin,
			"expected `strict` or `permissive`",
		)),
	}
}

pub(crate) fn validate_log_level(value: &str, origin: SettingSource) -> Result<(), ConfigError> {
	if is_valid_level(value) {
		return Ok(());
	}

	Err(ConfigError::invalid(
		"logging.level",
		value,
		origin,
		format!("expected one of {}", LEVELS.join(", ")),
	))
}

pub(crate) fn validate_declaration(path: &Path, origin: SettingSource) -> Result<(), ConfigError> {
	if path.is_file() {
		return Ok(());
	}

	Err(ConfigError::invalid(
		"declaration.path",
		path.display().to_string(),
		origin,
		"must name an existing file",
	))
}

pub(crate) fn validate_content_root(path: &Path, origin: SettingSource) -> Result<(), ConfigError> {
	if path.is_dir() {
		return Ok(());
	}

	Err(ConfigError::invalid(
		"content.root",
		path.display().to_string(),
		origin,
		"must name an existing directory",
	))
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn unknown_mode_names_its_origin() {
		let err = parse_mode("lenient", SettingSource::CliFlag("--mode")).unwrap_err();

		assert_eq!(err.key, "validation.mode");
		let message = err.to_string();
		assert!(message.contains("value: lenient"));
		assert!(message.contains("CLI argument `--mode`"));
	}

	#[test]
	fn modes_and_formats_are_case_insensitive() {
		let origin = || SettingSource::ConfigKey("validation.mode");
		assert_eq!(parse_mode("Permissive", origin()).unwrap(), ValidationMode::Permissive);
		assert_eq!(
			parse_format("TOML", SettingSource::ConfigKey("declaration.format")).unwrap(),
			SourceFormat::Toml
		);
	}

	#[test]
	fn unknown_format_is_rejected() {
		let err = parse_format(
			"yaml",
			SettingSource::Environment("TWCFG__DECLARATION__FORMAT"),
		)
		.unwrap_err();

		assert_eq!(err.key, "declaration.format");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn log_levels_are_checked() {
		assert!(validate_log_level("debug", SettingSource::ConfigKey("logging.level")).is_ok());

		let err = validate_log_level("loud", SettingSource::ConfigKey("logging.level")).unwrap_err();
		assert!(err.reason.contains("trace"));
	}

	#[test]
	fn missing_paths_are_rejected() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("tailwind.config.json");

		let err = validate_declaration(&missing, SettingSource::CliFlag("DECLARATION")).unwrap_err();
		assert_eq!(err.key, "declaration.path");

		assert!(validate_content_root(dir.path(), SettingSource::ConfigKey("content.root")).is_ok());
		assert!(validate_content_root(&missing, SettingSource::ConfigKey("content.root")).is_err());
	}
}
