use std::fmt;
use std::path::Path;

use ignore::overrides::OverrideBuilder;
use serde::ser::{Serialize, Serializer};

/// A `content` entry: a glob naming files the build tool scans for class
/// usage. A leading `!` excludes whatever the rest of the glob matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlobPattern {
	text: String,
}

impl GlobPattern {
	/// Validate `input` as a glob. Empty patterns, a bare `!` and globs that
	/// fail to compile (unclosed `[` or `{`, ...) are rejected.
	pub fn parse(input: &str) -> Result<Self, String> {
		let pattern = Self {
			text: input.to_string(),
		};

		if pattern.body().trim().is_empty() {
			return Err("glob patterns must not be empty".to_string());
		}

		OverrideBuilder::new(Path::new("/"))
			.add(&pattern.root_relative())
			.map_err(|err| err.to_string())?;

		Ok(pattern)
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Whether this pattern removes files matched by earlier ones.
	pub fn is_negated(&self) -> bool {
		self.text.starts_with('!')
	}

	/// The glob without its `!` marker.
	pub fn body(&self) -> &str {
		self.text.strip_prefix('!').unwrap_or(&self.text)
	}

	/// Whether the glob points outside the directory it is resolved from.
	pub fn escapes_root(&self) -> bool {
		let body = self.body();
		body.starts_with("../") || body.starts_with('/')
	}

	/// The glob anchored to the resolution root, in override syntax.
	///
	/// Declarations write `./src/**/*.tsx`; override globs without a slash
	/// prefix match at any depth, so the `./` is replaced by a `/` anchor.
	pub(crate) fn root_relative(&self) -> String {
		let body = self.body();
		let anchored = match body.strip_prefix("./") {
			Some(rest) => format!("/{rest}"),
			None if body.starts_with('/') || body.starts_with("**") => body.to_string(),
			None => format!("/{body}"),
		};
		if self.is_negated() {
			format!("!{anchored}")
		} else {
			anchored
		}
	}
}

impl fmt::Display for GlobPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

impl Serialize for GlobPattern {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn common_content_globs_are_accepted() {
		for input in [
			"./index.html",
			"./src/**/*.{js,ts,jsx,tsx}",
			"**/*.html",
			"!./src/**/*.test.tsx",
		] {
			assert!(GlobPattern::parse(input).is_ok(), "{input} should be valid");
		}
	}

	#[test]
	fn empty_and_unclosed_globs_are_rejected() {
		assert!(GlobPattern::parse("").is_err());
		assert!(GlobPattern::parse("   ").is_err());
		assert!(GlobPattern::parse("!").is_err());
		assert!(GlobPattern::parse("./src/**/*.{js,ts").is_err());
		assert!(GlobPattern::parse("./src/[abc.tsx").is_err());
	}

	#[test]
	fn negation_is_split_from_the_body() {
		let pattern = GlobPattern::parse("!./src/legacy/**").unwrap();
		assert!(pattern.is_negated());
		assert_eq!(pattern.body(), "./src/legacy/**");
		assert_eq!(pattern.root_relative(), "!/src/legacy/**");
		assert_eq!(pattern.as_str(), "!./src/legacy/**");
	}

	#[test]
	fn patterns_are_anchored_to_the_root() {
		let anchored = |input: &str| GlobPattern::parse(input).unwrap().root_relative();
		assert_eq!(anchored("./index.html"), "/index.html");
		assert_eq!(anchored("index.html"), "/index.html");
		assert_eq!(anchored("**/*.vue"), "**/*.vue");
	}

	#[test]
	fn parent_relative_globs_escape_the_root() {
		assert!(GlobPattern::parse("../shared/**/*.tsx").unwrap().escapes_root());
		assert!(!GlobPattern::parse("./src/**/*.tsx").unwrap().escapes_root());
	}
}
