//! `fontFamily` tokens.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.fontFamily]
//! sans = ["Inter", "ui-sans-serif", "system-ui"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use indexmap::IndexMap;

/// Ordered font fallbacks; the first available font wins.
pub type FontStack = Vec<String>;

/// Validate a `fontFamily` map rooted at `field`.
pub fn validate_fonts(
    fonts: &IndexMap<String, FontStack>,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (key, stack) in fonts {
        let path = field.join(key);

        if stack.is_empty() {
            diag.error_with_hint(
                path,
                "font fallback list is empty",
                "list at least one font, e.g. [\"ui-sans-serif\"]",
            );
            continue;
        }

        for (i, font) in stack.iter().enumerate() {
            if font.trim().is_empty() {
                diag.error(path.index(i), "font name is empty");
            }
        }
    }
}

/// Render a stack as a CSS `font-family` value.
///
/// Names containing spaces are quoted; generic families and
/// already-quoted names are left alone.
pub fn to_css(stack: &[String]) -> String {
    stack
        .iter()
        .map(|font| {
            let font = font.trim();
            if font.contains(' ') && !font.starts_with('"') && !font.starts_with('\'') {
                format!("\"{font}\"")
            } else {
                font.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(fonts: &[&str]) -> FontStack {
        fonts.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_empty_stack_rejected() {
        let fonts = IndexMap::from([("sans".to_string(), stack(&[]))]);
        let mut diag = ConfigDiagnostics::new();
        validate_fonts(&fonts, &FieldPath::new("theme.extend.fontFamily"), &mut diag);

        let err = diag.error_at("theme.extend.fontFamily.sans").unwrap();
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_blank_font_name_rejected() {
        let fonts = IndexMap::from([("sans".to_string(), stack(&["Inter", ""]))]);
        let mut diag = ConfigDiagnostics::new();
        validate_fonts(&fonts, &FieldPath::new("theme.extend.fontFamily"), &mut diag);

        assert!(diag.error_at("theme.extend.fontFamily.sans[1]").is_some());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(
            to_css(&stack(&["Inter", "ui-sans-serif", "system-ui"])),
            "Inter, ui-sans-serif, system-ui"
        );
        assert_eq!(
            to_css(&stack(&["Segoe UI", "\"Noto Sans\"", "sans-serif"])),
            "\"Segoe UI\", \"Noto Sans\", sans-serif"
        );
    }
}
