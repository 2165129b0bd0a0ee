use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use twcfg::app_dirs;

/// Declaration file names looked up in the working directory when none is
/// given, in priority order.
pub(super) const DEFAULT_DECLARATIONS: &[&str] = &["tailwind.config.json", "tailwind.config.toml"];

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("twcfg")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("settings builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default settings file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".twcfg.toml"));
        files.push(current_dir.join("twcfg.toml"));
    }

    files
}

/// Find the first default declaration present in `dir`.
pub(super) fn discover_declaration(dir: &std::path::Path) -> Option<PathBuf> {
    DEFAULT_DECLARATIONS
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
