//! Typed, validated form of a styling framework declaration.
//!
//! Values in this module are only produced by the [`loader`](crate::loader);
//! nothing here can be built from unchecked input or mutated afterwards.

mod color;
mod fonts;
mod glob;
mod plugin;

use serde::Serialize;

pub use color::{ColorToken, ColorTokens, ColorValue, HexColor, is_kebab_case};
pub use fonts::{FontFamilies, FontStack, GENERIC_FAMILIES, is_generic_family};
pub use glob::GlobPattern;
pub use plugin::PluginRef;

/// Configuration consumed by the external build tool.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Configuration {
	pub(crate) content: Vec<GlobPattern>,
	pub(crate) theme: Theme,
	pub(crate) plugins: Vec<PluginRef>,
}

impl Configuration {
	/// Globs naming the files scanned for class usage, in declaration order.
	pub fn content(&self) -> &[GlobPattern] {
		&self.content
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn colors(&self) -> &ColorTokens {
		&self.theme.extend.colors
	}

	pub fn font_family(&self) -> &FontFamilies {
		&self.theme.extend.font_family
	}

	pub fn plugins(&self) -> &[PluginRef] {
		&self.plugins
	}

	/// Serialize back to the declaration's JSON shape.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
	pub(crate) extend: ThemeExtend,
}

impl Theme {
	pub fn extend(&self) -> &ThemeExtend {
		&self.extend
	}
}

/// Additions layered over the framework's default theme.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeExtend {
	#[serde(rename = "fontFamily")]
	pub(crate) font_family: FontFamilies,
	pub(crate) colors: ColorTokens,
}

impl ThemeExtend {
	pub fn font_family(&self) -> &FontFamilies {
		&self.font_family
	}

	pub fn colors(&self) -> &ColorTokens {
		&self.colors
	}
}
