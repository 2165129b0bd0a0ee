use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use super::ParseError;

/// Structured data formats a declaration can be written in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceFormat {
	#[default]
	Json,
	Toml,
}

impl SourceFormat {
	/// Infer the format from a file extension, if it is one we understand.
	pub fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?;
		extension.parse().ok()
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Toml => "toml",
		}
	}

	pub(super) fn decode<T: DeserializeOwned>(self, source: &str) -> Result<T, ParseError> {
		match self {
			Self::Json => serde_json::from_str(source).map_err(|err| ParseError::new(self, err)),
			Self::Toml => toml::from_str(source)
				.map_err(|err| ParseError::new(self, err.message().trim_end())),
		}
	}
}

impl fmt::Display for SourceFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Json => "JSON",
			Self::Toml => "TOML",
		})
	}
}

impl FromStr for SourceFormat {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"json" => Ok(Self::Json),
			"toml" => Ok(Self::Toml),
			other => Err(format!("unknown declaration format `{other}`")),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn format_is_inferred_from_extension() {
		assert_eq!(
			SourceFormat::from_path(&PathBuf::from("tailwind.config.json")),
			Some(SourceFormat::Json)
		);
		assert_eq!(
			SourceFormat::from_path(&PathBuf::from("styles/tailwind.config.TOML")),
			Some(SourceFormat::Toml)
		);
		assert_eq!(SourceFormat::from_path(&PathBuf::from("tailwind.config.js")), None);
		assert_eq!(SourceFormat::from_path(&PathBuf::from("Makefile")), None);
	}

	#[test]
	fn json_syntax_errors_carry_the_format() {
		let err = SourceFormat::Json
			.decode::<serde_json::Value>("{ \"content\": [")
			.unwrap_err();
		assert_eq!(err.format, SourceFormat::Json);
		assert!(err.to_string().starts_with("failed to parse JSON declaration"));
	}
}
