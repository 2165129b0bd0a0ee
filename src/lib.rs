//! Typed loading and validation for utility-class styling framework
//! configuration.
//!
//! A declaration (JSON or TOML) lists the `content` globs the framework scans
//! for class usage, theme extensions (font fallback chains and colour tokens)
//! and extension plugins. [`load`] turns it into an immutable
//! [`Configuration`] or fails with a [`LoadError`] naming the offending field.

pub mod app_dirs;
pub mod content;
pub mod declaration;
pub mod loader;
pub mod logging;

pub use content::{ContentOptions, resolve_content_files};
pub use declaration::{
	ColorToken, ColorTokens, ColorValue, Configuration, FontFamilies, FontStack, GlobPattern,
	HexColor, PluginRef, Theme, ThemeExtend,
};
pub use loader::{
	LoadError, Loader, ParseError, SourceFormat, ValidationError, ValidationMode, load, load_file,
};
