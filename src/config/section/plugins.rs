//! `plugins` list.
//!
//! # Example
//!
//! ```toml
//! plugins = [
//!     "@tailwindcss/forms",
//!     { name = "@tailwindcss/typography", options = { className = "prose" } },
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a generator plugin, applied in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginRef {
    /// Bare plugin identifier.
    Name(String),
    /// Plugin identifier plus options passed through to the generator.
    Configured {
        name: String,
        #[serde(skip_serializing_if = "serde_json::Value::is_null")]
        options: serde_json::Value,
    },
}

impl<'de> Deserialize<'de> for PluginRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PluginRefVisitor)
    }
}

/// Reads the table form key by key, skipping unknown keys as `IgnoredAny`
/// so the loader's unknown-key tracking sees them.
struct PluginRefVisitor;

impl<'de> Visitor<'de> for PluginRefVisitor {
    type Value = PluginRef;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a plugin name or a table with `name` and optional `options`")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<PluginRef, E> {
        Ok(PluginRef::Name(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PluginRef, A::Error> {
        let mut name: Option<String> = None;
        let mut options = serde_json::Value::Null;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" if name.is_some() => return Err(de::Error::duplicate_field("name")),
                "name" => name = Some(map.next_value()?),
                "options" => options = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
        Ok(PluginRef::Configured { name, options })
    }
}

impl PluginRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Configured { name, .. } => name,
        }
    }

    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Configured { options, .. } if !options.is_null() => Some(options),
            _ => None,
        }
    }
}

/// Validate the plugin list.
pub fn validate_plugins(plugins: &[PluginRef], diag: &mut ConfigDiagnostics) {
    let field = FieldPath::new("plugins");
    let mut seen = FxHashSet::default();

    for (i, plugin) in plugins.iter().enumerate() {
        let name = plugin.name().trim();
        if name.is_empty() {
            diag.error(field.index(i), "plugin name is empty");
            continue;
        }
        if !seen.insert(name) {
            diag.warn(field.index(i), format!("plugin `{name}` is listed more than once"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        plugins: Vec<PluginRef>,
    }

    #[test]
    fn test_parse_both_forms() {
        let wrapper: Wrapper = toml::from_str(
            r#"plugins = ["forms", { name = "typography", options = { className = "prose" } }]"#,
        )
        .unwrap();

        assert_eq!(wrapper.plugins[0], PluginRef::Name("forms".into()));
        assert_eq!(wrapper.plugins[1].name(), "typography");
        assert_eq!(
            wrapper.plugins[1].options().unwrap()["className"],
            serde_json::json!("prose")
        );
        assert!(wrapper.plugins[0].options().is_none());
    }

    #[test]
    fn test_table_without_name_rejected() {
        let err = toml::from_str::<Wrapper>(r#"plugins = [{ options = { strategy = "class" } }]"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("missing field `name`"), "{err}");
    }

    #[test]
    fn test_wrong_type_names_expected_forms() {
        let err = serde_json::from_str::<Wrapper>(r#"{"plugins": [3]}"#).err().unwrap();
        assert!(err.to_string().contains("a plugin name or a table"), "{err}");
    }

    #[test]
    fn test_empty_name_rejected() {
        let plugins = vec![PluginRef::Name("forms".into()), PluginRef::Name(" ".into())];
        let mut diag = ConfigDiagnostics::new();
        validate_plugins(&plugins, &mut diag);
        assert!(diag.error_at("plugins[1]").is_some());
    }

    #[test]
    fn test_duplicate_warns() {
        let plugins = vec![
            PluginRef::Name("forms".into()),
            PluginRef::Configured {
                name: "forms".into(),
                options: serde_json::Value::Null,
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_plugins(&plugins, &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
