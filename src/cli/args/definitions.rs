use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FormatArg, ModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `twcfg` binary.
#[derive(Parser, Debug)]
#[command(
    name = "twcfg",
    version,
    long_version = long_version(),
    about = "Load and validate utility-class styling framework configuration",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "DECLARATION",
        help = "Declaration file to load (default: tailwind.config.json or tailwind.config.toml)"
    )]
    pub(crate) declaration: Option<PathBuf>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TWCFG_CONFIG",
        action = ArgAction::Append,
        help = "Additional settings file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default settings files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'f',
        long,
        value_enum,
        help = "Declaration format (default: inferred from the file extension)"
    )]
    pub(crate) format: Option<FormatArg>,
    #[arg(
        short = 'm',
        long,
        value_enum,
        help = "Validation mode (default: strict)"
    )]
    pub(crate) mode: Option<ModeArg>,
    #[arg(
        long = "require-generic-fallback",
        value_parser = BoolishValueParser::new(),
        help = "Fail when the body font chain lacks a generic family (default: disabled)"
    )]
    pub(crate) require_generic_fallback: Option<bool>,
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        help = "Directory content globs are resolved from (default: the declaration's directory)"
    )]
    pub(crate) root: Option<PathBuf>,
    #[arg(
        short = 'H',
        long = "hidden",
        value_parser = BoolishValueParser::new(),
        help = "Include hidden files when listing content (default: disabled)"
    )]
    pub(crate) hidden: Option<bool>,
    #[arg(
        long = "respect-ignore-files",
        value_parser = BoolishValueParser::new(),
        help = "Respect .gitignore and .ignore files when listing content (default: enabled)"
    )]
    pub(crate) respect_ignore_files: Option<bool>,
    #[arg(
        short = 's',
        long = "follow-symlinks",
        value_parser = BoolishValueParser::new(),
        help = "Follow symbolic links when listing content (default: disabled)"
    )]
    pub(crate) follow_symlinks: Option<bool>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level: off, error, warn, info, debug or trace (default: warn)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-json",
        value_parser = BoolishValueParser::new(),
        help = "Emit logs as JSON lines (default: disabled)"
    )]
    pub(crate) log_json: Option<bool>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved settings before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-files",
        help = "List the files matched by the content globs instead of the configuration (default: disabled)"
    )]
    pub(crate) list_files: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
