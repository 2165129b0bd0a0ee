use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI argument `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "settings key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error reporting.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) declaration_path: Option<SettingSource>,
	pub(crate) declaration_format: Option<SettingSource>,
	pub(crate) validation_mode: Option<SettingSource>,
	pub(crate) content_root: Option<SettingSource>,
	pub(crate) logging_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_declaration(&self) -> SettingSource {
		self.declaration_path
			.clone()
			.unwrap_or(SettingSource::ConfigKey("declaration.path"))
	}

	pub(crate) fn source_for_format(&self) -> SettingSource {
		self.declaration_format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("declaration.format"))
	}

	pub(crate) fn source_for_mode(&self) -> SettingSource {
		self.validation_mode
			.clone()
			.unwrap_or(SettingSource::ConfigKey("validation.mode"))
	}

	pub(crate) fn source_for_root(&self) -> SettingSource {
		self.content_root
			.clone()
			.unwrap_or(SettingSource::ConfigKey("content.root"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.logging_level
			.clone()
			.unwrap_or(SettingSource::ConfigKey("logging.level"))
	}
}
