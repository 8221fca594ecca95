//! `[theme]` section configuration.
//!
//! Dimensions set directly under `theme` replace the base theme's dimension;
//! dimensions under `theme.extend` are merged over it.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.fontFamily]
//! sans = ["Inter", "ui-sans-serif", "system-ui"]
//!
//! [theme.extend.colors.blue]
//! 500 = "#FF9900"
//!
//! # Replaces the whole base spacing scale
//! [theme.spacing]
//! sm = "0.5rem"
//! ```

mod color;
mod font;

pub use color::ColorValue;
pub use font::{FontStack, to_css as font_css};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme section: direct overrides plus `extend`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Merged over the base theme.
    #[serde(skip_serializing_if = "ThemeTokens::is_empty")]
    pub extend: ThemeTokens,

    /// Replace the base theme's dimensions.
    #[serde(flatten)]
    pub overrides: ThemeTokens,
}

/// Token maps for each theme dimension.
///
/// `None` means the dimension was not mentioned, which matters for
/// overrides: an empty map wipes the base dimension, a missing one keeps it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<IndexMap<String, FontStack>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<IndexMap<String, ColorValue>>,

    /// Any other dimension (spacing, borderRadius, ...), carried opaquely.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl ThemeTokens {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none() && self.colors.is_none() && self.other.is_empty()
    }

    /// Shade value of a color family, e.g. `color_shade("blue", "500")`.
    #[cfg(test)]
    pub fn color_shade(&self, family: &str, shade: &str) -> Option<&str> {
        self.colors.as_ref()?.get(family)?.shade(shade)
    }

    /// Every opaque dimension must be a table of tokens.
    fn check_shape(&self, field: &FieldPath) -> Result<(), ConfigError> {
        for (name, value) in &self.other {
            if !value.is_object() {
                return Err(ConfigError::Schema(format!(
                    "{}: expected a table of tokens, found {}",
                    field.join(name).as_str(),
                    json_kind(value)
                )));
            }
        }
        Ok(())
    }

    fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(fonts) = &self.font_family {
            font::validate_fonts(fonts, &field.join("fontFamily"), diag);
        }
        if let Some(colors) = &self.colors {
            color::validate_colors(colors, &field.join("colors"), diag);
        }
    }
}

impl ThemeSection {
    /// Reject shapes serde cannot express (opaque dimensions that are not tables).
    pub fn check_shape(&self) -> Result<(), ConfigError> {
        let field = FieldPath::new("theme");
        self.overrides.check_shape(&field)?;
        self.extend.check_shape(&field.join("extend"))
    }

    /// Validate token values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("theme");
        self.overrides.validate(&field, diag);
        self.extend.validate(&field.join("extend"), diag);
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "a table",
    }
}
