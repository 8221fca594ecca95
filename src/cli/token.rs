//! `windcfg token`: look up one token in the resolved theme.

use anyhow::{Context, Result};

use crate::{config::Config, theme::resolve};

pub fn run_token(config: &Config, name: &str, font: bool) -> Result<()> {
    println!("{}", lookup(config, name, font)?);
    Ok(())
}

/// `blue-500` / `black` / a scale's `DEFAULT` shade, or a CSS `font-family`
/// value when `font` is set.
fn lookup(config: &Config, name: &str, font: bool) -> Result<String> {
    let theme = resolve(&config.theme);
    if font {
        return theme
            .font_family_css(name)
            .with_context(|| format!("no font family `{name}` in the resolved theme"));
    }
    theme
        .color(name)
        .map(str::to_string)
        .with_context(|| format!("no color `{name}` in the resolved theme"))
}
