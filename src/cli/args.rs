//! Command-line interface definitions.

use crate::config::ConfigFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Typed loader and validator for utility-class CSS theme configs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for windcfg.toml / windcfg.json)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, reporting every problem found
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown keys as errors instead of warnings
        #[arg(short, long)]
        deny_unknown: bool,
    },

    /// Print the loaded configuration
    #[command(visible_alias = "p")]
    Show {
        /// Print the theme resolved against the base tokens
        #[arg(short, long)]
        resolved: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },

    /// List the files matched by the content globs
    #[command(visible_alias = "s")]
    Scan {
        /// Directory to scan (default: the config file's directory)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: Option<PathBuf>,
    },

    /// Print one token from the resolved theme (`blue-500`, `black`, `--font sans`)
    #[command(visible_alias = "t")]
    Token {
        /// Color name, or font family key with --font
        name: String,

        /// Look up a font family and print its CSS `font-family` value
        #[arg(long)]
        font: bool,
    },

    /// Print the fingerprint of the resolved configuration
    Hash {
        /// Print only the first 8 hex characters
        #[arg(short, long)]
        short: bool,
    },

    /// Write a starter config (to --config, or windcfg.toml in the current directory)
    #[command(visible_alias = "i")]
    Init {
        /// File format to write (default: from the --config extension, else toml)
        #[arg(short, long, value_enum)]
        format: Option<ConfigFormat>,

        /// Print the config to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub const fn deny_unknown(&self) -> bool {
        matches!(
            self.command,
            Commands::Check {
                deny_unknown: true
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["windcfg", "check", "--deny-unknown"]).unwrap();
        assert!(cli.deny_unknown());
    }

    #[test]
    fn test_parse_show_json() {
        let cli =
            Cli::try_parse_from(["windcfg", "-C", "x/windcfg.toml", "show", "-r", "-f", "json"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x/windcfg.toml")));
        match cli.command {
            Commands::Show { resolved, format } => {
                assert!(resolved);
                assert_eq!(format, ConfigFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_init_defaults() {
        let cli = Cli::try_parse_from(["windcfg", "init"]).unwrap();
        match cli.command {
            Commands::Init { format, dry, force } => {
                assert_eq!(format, None);
                assert!(!dry && !force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_token_font() {
        let cli = Cli::try_parse_from(["windcfg", "token", "--font", "sans"]).unwrap();
        assert!(!cli.deny_unknown());
        match cli.command {
            Commands::Token { name, font } => {
                assert_eq!(name, "sans");
                assert!(font);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["windcfg", "scan", "-v", "--color", "never"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
