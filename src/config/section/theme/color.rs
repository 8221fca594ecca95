//! `colors` tokens.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.colors]
//! brand = "#FF9900"
//!
//! [theme.extend.colors.blue]
//! 50 = "#FFF5E6"
//! 500 = "#FF9900"
//! 900 = "#663100"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use indexmap::IndexMap;
use regex::Regex;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Shade key → hex color.
pub type ColorScale = IndexMap<String, String>;

/// A color family: either a single value or a shade scale.
///
/// Config values must be `#RRGGBB`; keywords such as `transparent` only
/// appear in the built-in base theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Scale(ColorScale),
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorValueVisitor)
    }
}

struct ColorValueVisitor;

impl<'de> Visitor<'de> for ColorValueVisitor {
    type Value = ColorValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a \"#RRGGBB\" string or a table of shades")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ColorValue, E> {
        Ok(ColorValue::Single(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorValue, A::Error> {
        let mut scale = ColorScale::new();
        while let Some(shade) = map.next_key::<String>()? {
            let color = map.next_value::<String>().map_err(|_| {
                de::Error::custom(format!("shade `{shade}` must be a \"#RRGGBB\" string"))
            })?;
            scale.insert(shade, color);
        }
        Ok(ColorValue::Scale(scale))
    }
}

impl ColorValue {
    /// Look up one shade. A single color has no shades.
    pub fn shade(&self, key: &str) -> Option<&str> {
        match self {
            Self::Scale(scale) => scale.get(key).map(String::as_str),
            Self::Single(_) => None,
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Scale(_) => None,
        }
    }

    /// Merge `other` over `self` the way `extend` does: scales merge
    /// shade-by-shade, anything else replaces.
    pub fn merge(&mut self, other: &Self) {
        match (self, other) {
            (Self::Scale(base), Self::Scale(ext)) => {
                for (shade, value) in ext {
                    base.insert(shade.clone(), value.clone());
                }
            }
            (this, other) => *this = other.clone(),
        }
    }
}

/// Whether `value` is a `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Validate a `colors` map rooted at `field`.
pub fn validate_colors(
    colors: &IndexMap<String, ColorValue>,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (family, value) in colors {
        let family_path = field.join(family);

        if family.trim().is_empty() {
            diag.error(family_path, "color family name is empty");
            continue;
        }

        match value {
            ColorValue::Single(color) => {
                if !is_hex_color(color) {
                    invalid_hex(diag, family_path, color);
                }
            }
            ColorValue::Scale(scale) => validate_scale(scale, family_path, diag),
        }
    }
}

fn validate_scale(scale: &ColorScale, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if scale.is_empty() {
        diag.error(field, "color scale has no shades");
        return;
    }

    for (shade, color) in scale {
        if !is_hex_color(color) {
            invalid_hex(diag, field.join(shade), color);
        }
    }

    // Lighter to darker by convention; only checked when every key is numeric.
    let numeric: Option<Vec<u32>> = scale.keys().map(|k| k.parse().ok()).collect();
    if let Some(keys) = numeric
        && keys.windows(2).any(|w| w[0] >= w[1])
    {
        diag.warn(field, "shade keys are not in ascending order");
    }
}

fn invalid_hex(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str) {
    let hint = match value.strip_prefix('#') {
        None if is_hex_color(&format!("#{value}")) => format!("did you mean \"#{value}\"?"),
        _ => "use the #RRGGBB form, e.g. \"#FF9900\"".to_string(),
    };
    diag.error_with_hint(field, format!("`{value}` is not a valid hex color"), hint);
}
