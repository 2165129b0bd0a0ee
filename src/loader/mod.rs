//! Parse and validate declarations into a [`Configuration`].
//!
//! Loading is all-or-nothing: either every invariant holds and a complete
//! [`Configuration`] is returned, or the first violation is reported as a
//! [`LoadError`].

mod error;
mod format;
mod raw;
mod validation;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use error::{LoadError, ParseError, ValidationError};
pub use format::SourceFormat;

use crate::declaration::Configuration;
use raw::RawConfiguration;

/// How strictly declaration values are checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationMode {
	/// Colours must be `#RRGGBB`, token names kebab-case and unique.
	#[default]
	Strict,
	/// Accept what the styling framework itself accepts: any non-empty
	/// colour string, any token name, later duplicates overriding earlier
	/// ones. Structural checks still apply.
	Permissive,
}

/// Configurable declaration loader.
#[derive(Clone, Debug, Default)]
pub struct Loader {
	mode: ValidationMode,
	require_generic_fallback: bool,
}

impl Loader {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn mode(mut self, mode: ValidationMode) -> Self {
		self.mode = mode;
		self
	}

	/// Reject a `body` font chain that does not end in a generic family
	/// instead of only logging a warning.
	#[must_use]
	pub fn require_generic_fallback(mut self, required: bool) -> Self {
		self.require_generic_fallback = required;
		self
	}

	pub fn validation_mode(&self) -> ValidationMode {
		self.mode
	}

	/// Parse `source` in the given format and validate it.
	pub fn load(&self, source: &str, format: SourceFormat) -> Result<Configuration, LoadError> {
		let raw: RawConfiguration = format.decode(source)?;
		Ok(validation::validate(raw, self)?)
	}

	/// Read and load a declaration file. Without an explicit `format` the
	/// file extension decides, falling back to JSON.
	pub fn load_file(
		&self,
		path: &Path,
		format: Option<SourceFormat>,
	) -> Result<Configuration, LoadError> {
		let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		let format = format
			.or_else(|| SourceFormat::from_path(path))
			.unwrap_or_default();
		debug!(path = %path.display(), %format, "loading declaration");

		self.load(&source, format)
	}
}

/// Load a JSON declaration with strict validation.
pub fn load(source: &str) -> Result<Configuration, LoadError> {
	Loader::new().load(source, SourceFormat::Json)
}

/// Load a declaration file with strict validation.
pub fn load_file(path: &Path) -> Result<Configuration, LoadError> {
	Loader::new().load_file(path, None)
}
