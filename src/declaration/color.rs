use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An sRGB colour written as `#RRGGBB`.
///
/// The original spelling is kept so a loaded declaration serializes back
/// exactly as it was written (`#5D3FD3` stays upper case).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
	text: String,
	rgb: [u8; 3],
}

impl HexColor {
	/// Parse `#RRGGBB`. Shorthand (`#RGB`), alpha channels and surrounding
	/// whitespace are rejected.
	pub fn parse(input: &str) -> Result<Self, String> {
		let Some(hex) = input.strip_prefix('#') else {
			return Err("hex colours must start with `#`".to_string());
		};

		if hex.len() != 6 {
			return Err(format!(
				"hex colours must have exactly 6 digits, found {}",
				hex.chars().count()
			));
		}

		if let Some(ch) = hex.chars().find(|ch| !ch.is_ascii_hexdigit()) {
			return Err(format!("`{ch}` is not a hexadecimal digit"));
		}

		let component = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).map_err(|err| err.to_string())
		};

		Ok(Self {
			text: input.to_string(),
			rgb: [component(0..2)?, component(2..4)?, component(4..6)?],
		})
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn rgb(&self) -> [u8; 3] {
		self.rgb
	}
}

impl fmt::Display for HexColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

/// Value assigned to a colour token.
///
/// Strict loading only ever produces [`ColorValue::Hex`]. Permissive loading
/// keeps values it cannot parse as [`ColorValue::Raw`] and leaves them for the
/// consuming build tool to interpret.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorValue {
	Hex(HexColor),
	Raw(String),
}

impl ColorValue {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Hex(color) => color.as_str(),
			Self::Raw(value) => value,
		}
	}

	pub fn as_hex(&self) -> Option<&HexColor> {
		match self {
			Self::Hex(color) => Some(color),
			Self::Raw(_) => None,
		}
	}
}

impl fmt::Display for ColorValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for ColorValue {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for ColorValue {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl Serialize for ColorValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

/// A named colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorToken {
	pub name: String,
	pub value: ColorValue,
}

/// Colour tokens in declaration order. Names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTokens {
	tokens: Vec<ColorToken>,
}

impl ColorTokens {
	pub(crate) fn new(tokens: Vec<ColorToken>) -> Self {
		Self { tokens }
	}

	/// Look up a token by name.
	pub fn get(&self, name: &str) -> Option<&ColorValue> {
		self.tokens
			.iter()
			.find(|token| token.name == name)
			.map(|token| &token.value)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ColorToken> {
		self.tokens.iter()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(|token| token.name.as_str())
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

impl Serialize for ColorTokens {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
		for token in &self.tokens {
			map.serialize_entry(&token.name, &token.value)?;
		}
		map.end()
	}
}

/// Whether `name` is lower-case kebab-case: ASCII letters and digits in
/// segments joined by single hyphens.
pub fn is_kebab_case(name: &str) -> bool {
	!name.is_empty()
		&& name.split('-').all(|segment| {
			!segment.is_empty()
				&& segment
					.chars()
					.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn six_digit_hex_is_accepted_in_either_case() {
		let color = HexColor::parse("#5D3FD3").unwrap();
		assert_eq!(color.rgb(), [0x5d, 0x3f, 0xd3]);
		assert_eq!(color.as_str(), "#5D3FD3");

		let lower = HexColor::parse("#ffd400").unwrap();
		assert_eq!(lower.rgb(), [0xff, 0xd4, 0x00]);
	}

	#[test]
	fn malformed_hex_is_rejected_with_a_reason() {
		let missing_hash = HexColor::parse("5D3FD3").unwrap_err();
		assert!(missing_hash.contains("must start with `#`"));

		let shorthand = HexColor::parse("#FD0").unwrap_err();
		assert!(shorthand.contains("exactly 6 digits"));

		let alpha = HexColor::parse("#5D3FD3FF").unwrap_err();
		assert!(alpha.contains("found 8"));

		let bad_digit = HexColor::parse("#5D3FDG").unwrap_err();
		assert!(bad_digit.contains("`G`"));

		assert!(HexColor::parse(" #5D3FD3").is_err());
		assert!(HexColor::parse("#5D3FD3 ").is_err());
	}

	#[test]
	fn non_ascii_input_does_not_panic() {
		assert!(HexColor::parse("#ééé").is_err());
	}

	#[test]
	fn kebab_case_names() {
		assert!(is_kebab_case("brand-deep-purple"));
		assert!(is_kebab_case("gray-950"));
		assert!(is_kebab_case("primary"));
		assert!(!is_kebab_case(""));
		assert!(!is_kebab_case("Brand-Purple"));
		assert!(!is_kebab_case("brand_purple"));
		assert!(!is_kebab_case("brand--purple"));
		assert!(!is_kebab_case("-brand"));
		assert!(!is_kebab_case("brand-"));
	}

	#[test]
	fn tokens_are_looked_up_by_name() {
		let tokens = ColorTokens::new(vec![ColorToken {
			name: "brand-vibrant-gold".into(),
			value: ColorValue::Hex(HexColor::parse("#FFD400").unwrap()),
		}]);

		assert_eq!(*tokens.get("brand-vibrant-gold").unwrap(), "#FFD400");
		assert!(tokens.get("brand-deep-purple").is_none());
		assert_eq!(tokens.len(), 1);
	}
}
