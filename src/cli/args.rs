//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::catalog::CatalogVariant;
use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_LOCALE;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "datefmt")]
#[command(about = "Locale-aware date/time format cheat sheet", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Locale to format with (e.g., "en-GB", "de-DE", "ja-JP")
    #[arg(short, long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Which style combinations to list
    #[arg(long, global = true, value_enum)]
    pub(crate) catalog: Option<CatalogVariant>,

    /// Timezone for formatted times (e.g., "Europe/London", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Format this instant instead of the launch time (RFC 3339)
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    pub(crate) at: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Hide the options column in the table
    #[arg(long, global = true)]
    pub(crate) no_json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (print diagnostics to stderr)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_json && config.no_json {
            self.no_json = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.catalog.is_none() {
            self.catalog = config.catalog;
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub(crate) fn catalog_variant(&self) -> CatalogVariant {
        self.catalog.unwrap_or_default()
    }

    /// `--jq` implies JSON output
    pub(crate) fn wants_json(&self) -> bool {
        self.json || self.jq.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datefmt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.locale(), "en-GB");
        assert_eq!(cli.catalog_variant(), CatalogVariant::Extended);
        assert!(!cli.wants_json());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["copy", "3", "--locale", "fr-FR", "--catalog", "paired"]);
        assert!(matches!(cli.command, Some(Commands::Copy { ref entry }) if entry == "3"));
        assert_eq!(cli.locale(), "fr-FR");
        assert_eq!(cli.catalog_variant(), CatalogVariant::Paired);
    }

    #[test]
    fn config_fills_unset_values() {
        let config: Config = toml::from_str(
            r#"
            locale = "de-DE"
            catalog = "paired"
            timezone = "UTC"
            color = "never"
            no_json = true
            "#,
        )
        .unwrap();
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.locale(), "de-DE");
        assert_eq!(cli.catalog_variant(), CatalogVariant::Paired);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.no_json);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_beats_config() {
        let config: Config = toml::from_str(r#"locale = "de-DE""#).unwrap();
        let cli = parse(&["-l", "ja-JP"]).with_config(&config);
        assert_eq!(cli.locale(), "ja-JP");
    }

    #[test]
    fn jq_implies_json() {
        assert!(parse(&["--jq", ".[0]"]).wants_json());
    }
}
