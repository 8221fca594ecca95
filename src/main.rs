//! windcfg - typed loader and validator for utility-class CSS theme configs.

mod cli;
mod config;
mod logger;
mod scan;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` runs before any config exists; every other command loads it first.
    let load = || common::load_config(&cli);

    match &cli.command {
        Commands::Init { format, dry, force } => {
            let (target, format) = cli::init::resolve_target(cli.config.as_deref(), *format)?;
            cli::init::run_init(&target, format, *dry, *force)
        }
        Commands::Check { .. } => cli::check::run_check(&load()?),
        Commands::Show { resolved, format } => cli::show::run_show(&load()?, *resolved, *format),
        Commands::Scan { root } => cli::scan::run_scan(&load()?, root.as_deref()),
        Commands::Token { name, font } => cli::token::run_token(&load()?, name, *font),
        Commands::Hash { short } => cli::hash::run_hash(&load()?, *short),
    }
}
