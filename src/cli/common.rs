//! Config discovery and loading shared across CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::Cli;
use crate::config::{Config, LoadOptions, find_config_file};

/// Config path from `--config`, or the nearest well-known file above cwd.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(path.clone());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    find_config_file(&cwd).with_context(|| {
        format!(
            "no windcfg.toml or windcfg.json found in '{}' or any parent. Run 'windcfg init' to create one.",
            cwd.display()
        )
    })
}

/// Load, validate and report warnings. Validation errors abort.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let path = resolve_config_path(cli)?;
    let options = LoadOptions {
        deny_unknown: cli.deny_unknown(),
    };

    let loaded = Config::load(&path, options)?;
    loaded.diagnostics.print_warnings();
    Ok(loaded.config)
}
