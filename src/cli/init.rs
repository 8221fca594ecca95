//! `windcfg init`: write a starter config.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use crate::config::{ColorValue, Config, ConfigFormat, ContentGlobs, ThemeSection, ThemeTokens};
use crate::log;

/// Orange-tinted `blue` scale shipped with the starter config.
const STARTER_BLUE: &[(&str, &str)] = &[
    ("50", "#FFF5E6"),
    ("100", "#FFEACC"),
    ("200", "#FFD699"),
    ("300", "#FFC266"),
    ("400", "#FFAD33"),
    ("500", "#FF9900"),
    ("600", "#FF7A00"),
    ("700", "#CC6200"),
    ("800", "#994900"),
    ("900", "#663100"),
];

/// The starter configuration: HTML templates, Inter as the sans stack and
/// a custom `blue` scale.
pub fn starter_config() -> Config {
    let blue = STARTER_BLUE
        .iter()
        .map(|(shade, color)| (shade.to_string(), color.to_string()))
        .collect();

    let extend = ThemeTokens {
        font_family: Some(IndexMap::from([(
            "sans".to_string(),
            vec!["Inter".into(), "ui-sans-serif".into(), "system-ui".into()],
        )])),
        colors: Some(IndexMap::from([(
            "blue".to_string(),
            ColorValue::Scale(blue),
        )])),
        other: IndexMap::new(),
    };

    Config {
        content: ContentGlobs::from(vec!["./templates/**/*.html", "./**/*.html"]),
        theme: ThemeSection {
            extend,
            overrides: ThemeTokens::default(),
        },
        ..Config::default()
    }
}

/// Render the starter config, with a header comment for TOML.
pub fn generate_template(format: ConfigFormat) -> Result<String> {
    let body = starter_config().render(format)?;
    Ok(match format {
        ConfigFormat::Toml => format!(
            "# windcfg configuration (v{})\n\n{}",
            env!("CARGO_PKG_VERSION"),
            body
        ),
        ConfigFormat::Json => body + "\n",
    })
}

/// Where `init` writes and in which format.
///
/// With `--config` the path's extension decides the format, and an explicit
/// `--format` must agree with it. Otherwise the well-known name for the
/// requested format (TOML by default) in the current directory.
pub fn resolve_target(
    config: Option<&Path>,
    format: Option<ConfigFormat>,
) -> Result<(PathBuf, ConfigFormat)> {
    let Some(path) = config else {
        let format = format.unwrap_or_default();
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        return Ok((cwd.join(format.file_name()), format));
    };

    let detected = ConfigFormat::from_path(path)?;
    if let Some(requested) = format
        && requested != detected
    {
        bail!(
            "'{}' is a .{} file but --format {} was given",
            path.display(),
            detected.extension(),
            requested.extension()
        );
    }
    Ok((path.to_path_buf(), detected))
}

/// Write the starter config to `target` (or stdout when `dry`).
pub fn run_init(target: &Path, format: ConfigFormat, dry: bool, force: bool) -> Result<()> {
    let template = generate_template(format)?;

    if dry {
        print!("{template}");
        return Ok(());
    }

    if target.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            target.display()
        );
    }

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(target, template)
        .with_context(|| format!("Failed to write '{}'", target.display()))?;

    log!("init"; "wrote {}", target.display());
    Ok(())
}
