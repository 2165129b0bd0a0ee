use clap::ValueEnum;

/// Validation modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    Strict,
    Permissive,
}

impl ModeArg {
    /// Return the string representation consumed by settings loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ModeArg::Strict => "strict",
            ModeArg::Permissive => "permissive",
        }
    }
}

/// Declaration formats selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Json,
    Toml,
}

impl FormatArg {
    /// Return the format identifier consumed by settings loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FormatArg::Json => "json",
            FormatArg::Toml => "toml",
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
