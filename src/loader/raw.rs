use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// Mirror of the declaration exactly as written, before any validation.
///
/// Every level rejects unknown keys and requires the keys it declares so that
/// typos surface as parse errors instead of silently dropped settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfiguration {
	pub(super) content: Vec<String>,
	pub(super) theme: RawTheme,
	pub(super) plugins: Vec<RawPluginRef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawTheme {
	pub(super) extend: RawThemeExtend,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawThemeExtend {
	#[serde(rename = "fontFamily")]
	pub(super) font_family: Entries<Vec<String>>,
	pub(super) colors: Entries<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawPluginRef {
	Name(String),
	Configured(RawConfiguredPlugin),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfiguredPlugin {
	pub(super) name: String,
	#[serde(default)]
	pub(super) options: serde_json::Value,
}

/// Object entries in declaration order, duplicates included.
///
/// Deserializing straight into a map would let a repeated key silently
/// overwrite the earlier one, so the entries are kept as written and
/// uniqueness is checked during validation.
#[derive(Debug)]
pub(super) struct Entries<V>(pub(super) Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for Entries<V>
where
	V: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct EntriesVisitor<V>(PhantomData<V>);

		impl<'de, V> Visitor<'de> for EntriesVisitor<V>
		where
			V: Deserialize<'de>,
		{
			type Value = Entries<V>;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("an object")
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
				while let Some((key, value)) = map.next_entry::<String, V>()? {
					entries.push((key, value));
				}
				Ok(Entries(entries))
			}
		}

		deserializer.deserialize_map(EntriesVisitor(PhantomData))
	}
}

