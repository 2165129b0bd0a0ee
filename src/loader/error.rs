use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::SourceFormat;

/// Errors produced while turning a declaration into a [`Configuration`](crate::Configuration).
#[derive(Debug, Error)]
pub enum LoadError {
	/// The declaration file could not be read.
	#[error("failed to read declaration {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The declaration is not well-formed structured data of the expected shape.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// The declaration parsed but one of its values is semantically invalid.
	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// Malformed input: bad syntax, unknown or missing fields, or wrong value types.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to parse {format} declaration: {message}")]
pub struct ParseError {
	pub format: SourceFormat,
	pub message: String,
}

impl ParseError {
	pub(crate) fn new(format: SourceFormat, message: impl ToString) -> Self {
		Self {
			format,
			message: message.to_string(),
		}
	}
}

/// A field whose value violates one of the configuration invariants.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {field}: {reason} (value: {value})")]
pub struct ValidationError {
	pub field: String,
	pub value: String,
	pub reason: String,
}

impl ValidationError {
	pub(crate) fn invalid<F, V, R>(field: F, value: V, reason: R) -> Self
	where
		F: Into<String>,
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			field: field.into(),
			value: value.into(),
			reason: reason.into(),
		}
	}
}

impl LoadError {
	/// Return the validation failure if that is what stopped the load.
	pub fn as_validation(&self) -> Option<&ValidationError> {
		match self {
			Self::Validation(err) => Some(err),
			_ => None,
		}
	}

	/// Return the parse failure if that is what stopped the load.
	pub fn as_parse(&self) -> Option<&ParseError> {
		match self {
			Self::Parse(err) => Some(err),
			_ => None,
		}
	}
}
