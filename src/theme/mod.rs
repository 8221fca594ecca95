//! Theme resolution: the config's overrides and extensions applied to
//! the base tokens.
//!
//! | Dimension    | `theme.<dim>`  | `theme.extend.<dim>`                        |
//! |--------------|----------------|---------------------------------------------|
//! | `fontFamily` | replaces all   | replaces per key (stacks are not joined)    |
//! | `colors`     | replaces all   | scales merge per shade, singles replace     |
//! | other        | replaces all   | merges per token key                        |
//!
//! Overrides are applied before extensions, so `extend` always wins.

mod base;

pub use base::base_theme;

use crate::config::{ColorValue, Config, FontStack, PluginRef, ThemeSection, ThemeTokens};
use crate::config::section::theme::font_css;
use indexmap::IndexMap;
use serde::Serialize;

/// Final token set handed to the generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub font_family: IndexMap<String, FontStack>,
    pub colors: IndexMap<String, ColorValue>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

/// Resolve a theme section against the base tokens.
pub fn resolve(theme: &ThemeSection) -> ResolvedTheme {
    let mut resolved = base_theme();
    resolved.apply_overrides(&theme.overrides);
    resolved.apply_extend(&theme.extend);
    resolved
}

impl ResolvedTheme {
    fn apply_overrides(&mut self, tokens: &ThemeTokens) {
        if let Some(fonts) = &tokens.font_family {
            self.font_family = fonts.clone();
        }
        if let Some(colors) = &tokens.colors {
            self.colors = colors.clone();
        }
        for (dim, value) in &tokens.other {
            self.other.insert(dim.clone(), value.clone());
        }
    }

    fn apply_extend(&mut self, tokens: &ThemeTokens) {
        if let Some(fonts) = &tokens.font_family {
            for (key, stack) in fonts {
                self.font_family.insert(key.clone(), stack.clone());
            }
        }

        if let Some(colors) = &tokens.colors {
            for (family, value) in colors {
                self.colors
                    .entry(family.clone())
                    .and_modify(|base| base.merge(value))
                    .or_insert_with(|| value.clone());
            }
        }

        for (dim, value) in &tokens.other {
            match (self.other.get_mut(dim), value) {
                (Some(serde_json::Value::Object(base)), serde_json::Value::Object(ext)) => {
                    for (key, token) in ext {
                        base.insert(key.clone(), token.clone());
                    }
                }
                _ => {
                    self.other.insert(dim.clone(), value.clone());
                }
            }
        }
    }

    /// Look up a color by utility name: `blue-500`, `black`, or a scale's
    /// `DEFAULT` shade (`brand`).
    pub fn color(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.colors.get(name) {
            return value.as_single().or_else(|| value.shade("DEFAULT"));
        }
        let (family, shade) = name.rsplit_once('-')?;
        self.colors.get(family)?.shade(shade)
    }

    pub fn font_stack(&self, key: &str) -> Option<&[String]> {
        self.font_family.get(key).map(Vec::as_slice)
    }

    /// CSS `font-family` value for a family key.
    pub fn font_family_css(&self, key: &str) -> Option<String> {
        self.font_stack(key).map(font_css)
    }

    /// Number of individual color values (each shade counts once).
    pub fn color_count(&self) -> usize {
        self.colors
            .values()
            .map(|value| match value {
                ColorValue::Single(_) => 1,
                ColorValue::Scale(scale) => scale.len(),
            })
            .sum()
    }
}

/// Everything the generator needs for one build, theme already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub content: Vec<String>,
    pub plugins: Vec<PluginRef>,
    pub theme: ResolvedTheme,
}

impl ResolvedConfig {
    pub fn new(config: &Config) -> Self {
        Self {
            content: config.content.patterns().to_vec(),
            plugins: config.plugins.clone(),
            theme: resolve(&config.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn resolve_toml(extra: &str) -> ResolvedTheme {
        let config = test_parse_config(&format!("content = [\"./**/*.html\"]\n{extra}"));
        resolve(&config.theme)
    }

    #[test]
    fn test_empty_theme_is_base() {
        assert_eq!(resolve_toml(""), base_theme());
    }

    #[test]
    fn test_extend_font_replaces_key_only() {
        let theme = resolve_toml(
            r#"
[theme.extend.fontFamily]
sans = ["Inter", "ui-sans-serif", "system-ui"]
"#,
        );
        assert_eq!(
            theme.font_family_css("sans").unwrap(),
            "Inter, ui-sans-serif, system-ui"
        );
        assert!(theme.font_stack("mono").is_some());
        assert!(theme.font_stack("serif").is_some());
    }

    #[test]
    fn test_extend_colors_merges_shades() {
        let theme = resolve_toml(
            r##"
[theme.extend.colors.blue]
500 = "#FF9900"
"##,
        );
        assert_eq!(theme.color("blue-500"), Some("#FF9900"));
        // Untouched base shades survive
        assert_eq!(theme.color("blue-950"), Some("#172554"));
        assert_eq!(theme.color("gray-500"), Some("#6B7280"));
        assert_eq!(theme.color("black"), Some("#000000"));
    }

    #[test]
    fn test_override_colors_replaces_dimension() {
        let theme = resolve_toml(
            r##"
[theme.colors]
ink = "#111111"
"##,
        );
        assert_eq!(theme.color("ink"), Some("#111111"));
        assert_eq!(theme.color("blue-500"), None);
        assert_eq!(theme.colors.len(), 1);
    }

    #[test]
    fn test_extend_wins_over_override() {
        let theme = resolve_toml(
            r##"
[theme.colors.brand]
500 = "#000001"

[theme.extend.colors.brand]
500 = "#000002"
600 = "#000003"
"##,
        );
        assert_eq!(theme.color("brand-500"), Some("#000002"));
        assert_eq!(theme.color("brand-600"), Some("#000003"));
    }

    #[test]
    fn test_default_shade_lookup() {
        let theme = resolve_toml(
            r##"
[theme.extend.colors.brand]
DEFAULT = "#FF9900"
dark = "#663100"
"##,
        );
        assert_eq!(theme.color("brand"), Some("#FF9900"));
        assert_eq!(theme.color("brand-dark"), Some("#663100"));
        assert_eq!(theme.color("brand-light"), None);
    }

    #[test]
    fn test_other_dimensions_merge() {
        let theme = resolve_toml(
            r#"
[theme.spacing]
sm = "0.5rem"

[theme.extend.spacing]
lg = "2rem"
"#,
        );
        let spacing = &theme.other["spacing"];
        assert_eq!(spacing["sm"], "0.5rem");
        assert_eq!(spacing["lg"], "2rem");
    }

    #[test]
    fn test_resolved_config_keeps_order() {
        let config = test_parse_config(
            r#"
content = ["./templates/**/*.html", "./**/*.html"]
plugins = ["forms", "typography"]
"#,
        );
        let resolved = ResolvedConfig::new(&config);
        assert_eq!(resolved.content, ["./templates/**/*.html", "./**/*.html"]);
        assert_eq!(resolved.plugins[1].name(), "typography");
    }

    #[test]
    fn test_color_count() {
        let base = base_theme();
        // 4 singles + gray and blue with 11 shades each
        assert_eq!(base.color_count(), 4 + 11 + 11);
    }
}
