//! Structured logging setup.
//!
//! Events go to stderr so that stdout only ever carries command output.

use anyhow::{Result, anyhow};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable whose filter directives override the configured level.
pub const LOG_ENV: &str = "TWCFG_LOG";

/// Log levels accepted in configuration and on the command line.
pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Logging options resolved from settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
	pub level: String,
	pub json: bool,
}

impl Default for LoggingOptions {
	fn default() -> Self {
		Self {
			level: "warn".to_string(),
			json: false,
		}
	}
}

/// Whether `level` names one of the accepted [`LEVELS`].
pub fn is_valid_level(level: &str) -> bool {
	LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
}

/// Install the global subscriber. `TWCFG_LOG` wins over `options.level`.
pub fn initialize(options: &LoggingOptions) -> Result<()> {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(options.level.trim().to_ascii_lowercase()))
		.map_err(|err| anyhow!("invalid log filter: {err}"))?;

	let registry = Registry::default().with(filter);
	let result = if options.json {
		registry
			.with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
			.try_init()
	} else {
		registry
			.with(fmt::layer().with_target(false).with_writer(std::io::stderr))
			.try_init()
	};

	result.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
