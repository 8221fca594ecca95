//! Configuration management for `windcfg.toml` / `windcfg.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Key definitions
//! │   ├── content    # content = [...]
//! │   ├── plugins    # plugins = [...]
//! │   └── theme/     # [theme], [theme.extend] (colors, fontFamily)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── format     # ConfigFormat
//! └── mod.rs         # Config (this file)
//! ```
//!
//! Loading is one-shot: read → parse (schema errors) → shape check →
//! validate (all semantic errors at once). The resulting [`Config`] is
//! immutable and passed explicitly to every command.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{ColorValue, ContentGlobs, FontStack, PluginRef, ThemeSection, ThemeTokens};

pub use types::{ConfigDiagnostics, ConfigError, ConfigFormat, FieldPath};

use crate::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Files to scan for class names
    pub content: ContentGlobs,

    /// Generator plugins, in application order
    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    /// Theme overrides and extensions
    #[serde(default, skip_serializing_if = "ThemeSection::is_default")]
    pub theme: ThemeSection,
}

/// Options controlling how strictly a file is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Treat unknown keys as a schema error instead of a warning.
    pub deny_unknown: bool,
}

/// A validated configuration plus the warnings found while loading it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Loaded, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        debug!("config"; "loading {} as {:?}", path.display(), format);

        let mut loaded = Self::parse(&content, format, options)?;
        loaded.config.config_path = crate::utils::path::normalize_path(path);
        Ok(loaded)
    }

    /// Parse and validate config text.
    pub fn parse(
        content: &str,
        format: ConfigFormat,
        options: LoadOptions,
    ) -> Result<Loaded, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, format)?;

        if options.deny_unknown && !ignored.is_empty() {
            return Err(ConfigError::Schema(format!(
                "unknown keys: {}",
                ignored.join(", ")
            )));
        }

        config.theme.check_shape()?;

        let mut diagnostics = config.validate();
        for key in ignored {
            diagnostics.warn(FieldPath::new(key), "unknown key, ignored");
        }

        match diagnostics.into_result() {
            Ok(diagnostics) => Ok(Loaded {
                config,
                diagnostics,
            }),
            Err(diagnostics) => Err(ConfigError::Validation(diagnostics)),
        }
    }

    /// Parse text, collecting any unknown keys.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, on_ignored)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                config
            }
        };

        Ok((config, ignored))
    }

    /// Validate every section, collecting all errors and warnings.
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.content.validate(&mut diag);
        self.theme.validate(&mut diag);
        section::validate_plugins(&self.plugins, &mut diag);
        diag
    }

    /// Directory content globs are resolved against.
    pub fn root(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new("."))
    }

    /// Serialize back to the given format.
    pub fn render(&self, format: ConfigFormat) -> anyhow::Result<String> {
        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}

impl ThemeSection {
    fn is_default(&self) -> bool {
        self.extend.is_empty() && self.overrides.is_empty()
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse TOML config, panicking on any error or unknown key.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let loaded = Config::parse(
        content,
        ConfigFormat::Toml,
        LoadOptions { deny_unknown: true },
    )
    .unwrap();
    loaded.config
}

// ============================================================================
// tests
// ============================================================================
