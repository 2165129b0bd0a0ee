//! Settings loading and resolution for the `twcfg` binary.
//!
//! These are the tool's own settings (where the declaration lives, how
//! strictly to validate it, how to log), not the declaration itself. `load`
//! is the entry point and returns a [`ResolvedSettings`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawSettings;
use sources::build_config;

pub use resolved::ResolvedSettings;

/// Load settings by combining settings files, environment variables and CLI
/// arguments, in increasing order of precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
	let builder = build_config(cli)?;
	let mut raw: RawSettings = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
