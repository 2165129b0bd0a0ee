use tracing::{debug, warn};

use super::raw::{Entries, RawConfiguration, RawPluginRef};
use super::{Loader, ValidationError, ValidationMode};
use crate::declaration::{
	ColorToken, ColorTokens, ColorValue, Configuration, FontFamilies, FontStack, GlobPattern,
	HexColor, PluginRef, Theme, ThemeExtend, is_kebab_case,
};

const CONTENT: &str = "content";
const FONT_FAMILY: &str = "theme.extend.fontFamily";
const COLORS: &str = "theme.extend.colors";
const PLUGINS: &str = "plugins";

/// Font role whose fallback chain is checked for a trailing generic family.
const BODY_ROLE: &str = "body";

pub(super) fn validate(
	raw: RawConfiguration,
	loader: &Loader,
) -> Result<Configuration, ValidationError> {
	let content = validate_content(raw.content)?;
	let font_family = validate_font_family(raw.theme.extend.font_family, loader)?;
	let colors = validate_colors(raw.theme.extend.colors, loader.mode)?;
	let plugins = validate_plugins(raw.plugins)?;

	debug!(
		content = content.len(),
		font_roles = font_family.len(),
		colors = colors.len(),
		plugins = plugins.len(),
		mode = ?loader.mode,
		"declaration validated"
	);

	Ok(Configuration {
		content,
		theme: Theme {
			extend: ThemeExtend {
				font_family,
				colors,
			},
		},
		plugins,
	})
}

fn validate_content(patterns: Vec<String>) -> Result<Vec<GlobPattern>, ValidationError> {
	if patterns.is_empty() {
		return Err(ValidationError::invalid(
			CONTENT,
			"[]",
			"at least one glob pattern is required",
		));
	}

	patterns
		.into_iter()
		.enumerate()
		.map(|(index, pattern)| {
			GlobPattern::parse(&pattern).map_err(|reason| {
				ValidationError::invalid(format!("{CONTENT}[{index}]"), pattern, reason)
			})
		})
		.collect()
}

fn validate_font_family(
	entries: Entries<Vec<String>>,
	loader: &Loader,
) -> Result<FontFamilies, ValidationError> {
	let mut roles: Vec<(String, FontStack)> = Vec::with_capacity(entries.0.len());

	for (role, families) in entries.0 {
		let field = format!("{FONT_FAMILY}.{role}");

		if role.trim().is_empty() {
			return Err(ValidationError::invalid(
				FONT_FAMILY,
				role,
				"font role names must not be empty",
			));
		}

		if families.is_empty() {
			return Err(ValidationError::invalid(
				field,
				"[]",
				"font fallback chains must not be empty",
			));
		}

		if let Some(index) = families.iter().position(|family| family.trim().is_empty()) {
			return Err(ValidationError::invalid(
				format!("{field}[{index}]"),
				families[index].clone(),
				"font family names must not be empty",
			));
		}

		let stack = FontStack::new(families);
		match roles.iter_mut().find(|(existing, _)| *existing == role) {
			Some(slot) => {
				if loader.mode == ValidationMode::Strict {
					return Err(ValidationError::invalid(
						field,
						role,
						"font role is declared more than once",
					));
				}
				warn!(role = %role, "font role declared more than once; keeping the last chain");
				slot.1 = stack;
			}
			None => roles.push((role, stack)),
		}
	}

	if let Some((_, body)) = roles.iter().find(|(role, _)| role == BODY_ROLE)
		&& !body.ends_with_generic()
	{
		if loader.require_generic_fallback {
			return Err(ValidationError::invalid(
				format!("{FONT_FAMILY}.{BODY_ROLE}"),
				body.last(),
				"fallback chain must end in a generic family such as `sans-serif`",
			));
		}
		warn!(
			last = body.last(),
			"body font chain does not end in a generic family"
		);
	}

	Ok(FontFamilies::new(roles))
}

fn validate_colors(
	entries: Entries<String>,
	mode: ValidationMode,
) -> Result<ColorTokens, ValidationError> {
	let mut tokens: Vec<ColorToken> = Vec::with_capacity(entries.0.len());

	for (name, value) in entries.0 {
		let field = format!("{COLORS}.{name}");

		if name.is_empty() {
			return Err(ValidationError::invalid(
				COLORS,
				name,
				"colour token names must not be empty",
			));
		}

		if mode == ValidationMode::Strict && !is_kebab_case(&name) {
			return Err(ValidationError::invalid(
				field,
				name,
				"colour token names must be lower-case kebab-case",
			));
		}

		let value = match (HexColor::parse(&value), mode) {
			(Ok(color), _) => ColorValue::Hex(color),
			(Err(reason), ValidationMode::Strict) => {
				return Err(ValidationError::invalid(field, value, reason));
			}
			(Err(_), ValidationMode::Permissive) if value.trim().is_empty() => {
				return Err(ValidationError::invalid(
					field,
					value,
					"colour values must not be empty",
				));
			}
			(Err(reason), ValidationMode::Permissive) => {
				warn!(token = %name, value = %value, %reason, "keeping colour that is not `#RRGGBB`");
				ColorValue::Raw(value)
			}
		};

		match tokens.iter_mut().find(|token| token.name == name) {
			Some(existing) => {
				if mode == ValidationMode::Strict {
					return Err(ValidationError::invalid(
						field,
						value.as_str(),
						"colour token is declared more than once",
					));
				}
				warn!(token = %name, "colour token declared more than once; keeping the last value");
				existing.value = value;
			}
			None => tokens.push(ColorToken { name, value }),
		}
	}

	Ok(ColorTokens::new(tokens))
}

fn validate_plugins(plugins: Vec<RawPluginRef>) -> Result<Vec<PluginRef>, ValidationError> {
	let mut validated = Vec::with_capacity(plugins.len());

	for (index, plugin) in plugins.into_iter().enumerate() {
		let plugin = match plugin {
			RawPluginRef::Name(name) => PluginRef::Name(name),
			RawPluginRef::Configured(configured) => PluginRef::Configured {
				name: configured.name,
				options: configured.options,
			},
		};

		if plugin.name().trim().is_empty() {
			return Err(ValidationError::invalid(
				format!("{PLUGINS}[{index}]"),
				plugin.name(),
				"plugin references must name a package",
			));
		}

		if validated
			.iter()
			.any(|existing: &PluginRef| existing.name() == plugin.name())
		{
			warn!(plugin = plugin.name(), "plugin is listed more than once");
		}

		validated.push(plugin);
	}

	Ok(validated)
}

#[cfg(test)]
mod tests;
