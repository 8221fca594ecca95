//! Configuration error types.

use super::FieldPath;
use crate::logger::paint;
use owo_colors::Style;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// The document does not have the expected shape (syntax error,
    /// wrong value type, missing required key, unknown key when denied).
    #[error("Config schema error: {0}")]
    Schema(String),

    #[error("Unsupported config format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    /// Shape is fine but one or more values are semantically invalid.
    #[error("{0}")]
    Validation(ConfigDiagnostics),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config key path (e.g., "theme.extend.colors.blue.500")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        let dim = Style::new().dimmed();
        writeln!(
            f,
            "{}{}{}",
            paint("[", dim),
            paint(self.field.as_str(), Style::new().cyan()),
            paint("]", dim)
        )?;
        write!(
            f,
            "{} {}: {}",
            paint("→", Style::new().red()),
            self.field.as_str(),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", paint("hint:", Style::new().yellow()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal findings (unknown keys, duplicate globs, shade order).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        let warnings = self.warnings();
        if warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "config has {} warning(s):", warnings.len());
        for (field, message) in warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Find the first error reported for `path`.
    #[cfg(test)]
    pub fn error_at(&self, path: &str) -> Option<&ConfigDiagnostic> {
        self.errors.iter().find(|e| e.field.as_str() == path)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<Self, Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = Style::new().dimmed();
        writeln!(
            f,
            "{}\n",
            paint("config validation failed:", Style::new().red().bold())
        )?;
        for (i, err) in self.errors().iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", dim),
                paint(self.len(), Style::new().red().bold()),
                paint("errors", dim)
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("windcfg.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("windcfg.toml"));

        let schema_err = ConfigError::Schema("missing field `content`".to_string());
        assert!(format!("{schema_err}").contains("missing field `content`"));
    }

    #[test]
    fn test_diagnostic_display_contains_path() {
        let diag = ConfigDiagnostic::new(
            FieldPath::new("theme.extend.colors.blue.500"),
            "not a valid hex color",
        )
        .with_hint("use the #RRGGBB form");
        let display = format!("{diag}");
        assert!(display.contains("theme.extend.colors.blue.500"));
        assert!(display.contains("not a valid hex color"));
        assert!(display.contains("#RRGGBB"));
    }

    #[test]
    fn test_into_result_keeps_warnings() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("content[1]"), "duplicate pattern");
        let ok = diag.into_result().unwrap();
        assert_eq!(ok.warnings().len(), 1);
    }

    #[test]
    fn test_error_at() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("plugins[0]"), "empty plugin name");
        assert!(diag.error_at("plugins[0]").is_some());
        assert!(diag.error_at("content").is_none());
        assert!(diag.into_result().is_err());
    }
}
