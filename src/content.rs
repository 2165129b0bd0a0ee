//! Resolve `content` globs to the files they name.
//!
//! Only paths are produced. Reading those files for class names is left to
//! the build tool consuming the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use tracing::{debug, warn};

use crate::declaration::GlobPattern;

/// Traversal switches applied while resolving content globs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
	pub include_hidden: bool,
	pub respect_ignore_files: bool,
	pub follow_symlinks: bool,
}

impl Default for ContentOptions {
	fn default() -> Self {
		Self {
			include_hidden: false,
			respect_ignore_files: true,
			follow_symlinks: false,
		}
	}
}

/// List files under `root` matched by `patterns`, as sorted paths relative to
/// `root`.
///
/// Later patterns take precedence, so a trailing `!` pattern removes files
/// matched earlier. Patterns reaching outside `root` are skipped with a
/// warning.
///
/// # Errors
///
/// Returns an error if `root` cannot be canonicalized or a pattern fails to
/// compile.
pub fn resolve_content_files(
	root: &Path,
	patterns: &[GlobPattern],
	options: &ContentOptions,
) -> Result<Vec<PathBuf>> {
	let root = fs::canonicalize(root)
		.with_context(|| format!("failed to canonicalize content root {}", root.display()))?;

	let mut overrides = OverrideBuilder::new(&root);
	let mut includes = 0usize;
	for pattern in patterns {
		if pattern.escapes_root() {
			warn!(pattern = %pattern, root = %root.display(), "content pattern points outside the root; skipping");
			continue;
		}
		overrides
			.add(&pattern.root_relative())
			.with_context(|| format!("invalid content pattern `{pattern}`"))?;
		if !pattern.is_negated() {
			includes += 1;
		}
	}

	if includes == 0 {
		debug!("no content pattern selects files under the root");
		return Ok(Vec::new());
	}

	let overrides = overrides
		.build()
		.context("failed to compile content patterns")?;

	let respect = options.respect_ignore_files;
	let walker = WalkBuilder::new(&root)
		.hidden(!options.include_hidden)
		.follow_links(options.follow_symlinks)
		.ignore(respect)
		.git_ignore(respect)
		.git_global(respect)
		.git_exclude(respect)
		.parents(respect)
		.require_git(false)
		.overrides(overrides)
		.build();

	let mut files = Vec::new();
	for entry in walker {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				warn!(error = %err, "skipping unreadable entry");
				continue;
			}
		};

		if !entry.file_type().is_some_and(|kind| kind.is_file()) {
			continue;
		}

		let relative = entry
			.path()
			.strip_prefix(&root)
			.unwrap_or_else(|_| entry.path())
			.to_path_buf();
		files.push(relative);
	}

	files.sort();
	files.dedup();
	debug!(count = files.len(), root = %root.display(), "resolved content files");
	Ok(files)
}
