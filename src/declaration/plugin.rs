use serde::Serialize;

/// Reference to a framework extension plugin, either by package name alone
/// or with an options object handed to the plugin factory.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginRef {
	Name(String),
	Configured {
		name: String,
		#[serde(skip_serializing_if = "serde_json::Value::is_null")]
		options: serde_json::Value,
	},
}

impl PluginRef {
	pub fn name(&self) -> &str {
		match self {
			Self::Name(name) | Self::Configured { name, .. } => name,
		}
	}

	/// Options passed to the plugin, if any were declared.
	pub fn options(&self) -> Option<&serde_json::Value> {
		match self {
			Self::Name(_) => None,
			Self::Configured { options, .. } if options.is_null() => None,
			Self::Configured { options, .. } => Some(options),
		}
	}
}
