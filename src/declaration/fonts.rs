use serde::ser::{Serialize, SerializeMap, Serializer};

/// CSS generic family keywords a fallback chain may end with.
pub const GENERIC_FAMILIES: &[&str] = &[
	"serif",
	"sans-serif",
	"monospace",
	"cursive",
	"fantasy",
	"system-ui",
	"ui-serif",
	"ui-sans-serif",
	"ui-monospace",
	"ui-rounded",
	"emoji",
	"math",
	"fangsong",
];

/// Ordered, non-empty font-family fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontStack {
	families: Vec<String>,
}

impl FontStack {
	pub(crate) fn new(families: Vec<String>) -> Self {
		debug_assert!(!families.is_empty());
		Self { families }
	}

	pub fn families(&self) -> &[String] {
		&self.families
	}

	/// The family the browser falls back to last.
	pub fn last(&self) -> &str {
		self.families.last().map(String::as_str).unwrap_or_default()
	}

	/// Whether the chain ends in a generic family such as `sans-serif`.
	pub fn ends_with_generic(&self) -> bool {
		is_generic_family(self.last())
	}

	pub fn len(&self) -> usize {
		self.families.len()
	}

	pub fn is_empty(&self) -> bool {
		self.families.is_empty()
	}
}

impl Serialize for FontStack {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.families.serialize(serializer)
	}
}

pub fn is_generic_family(name: &str) -> bool {
	GENERIC_FAMILIES.contains(&name.trim().to_ascii_lowercase().as_str())
}

/// Font roles (`body`, `display`, ...) and their fallback chains, in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontFamilies {
	roles: Vec<(String, FontStack)>,
}

impl FontFamilies {
	pub(crate) fn new(roles: Vec<(String, FontStack)>) -> Self {
		Self { roles }
	}

	pub fn get(&self, role: &str) -> Option<&FontStack> {
		self.roles
			.iter()
			.find(|(name, _)| name == role)
			.map(|(_, stack)| stack)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FontStack)> {
		self.roles.iter().map(|(name, stack)| (name.as_str(), stack))
	}

	pub fn len(&self) -> usize {
		self.roles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.roles.is_empty()
	}
}

impl Serialize for FontFamilies {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.roles.len()))?;
		for (role, stack) in &self.roles {
			map.serialize_entry(role, stack)?;
		}
		map.end()
	}
}
