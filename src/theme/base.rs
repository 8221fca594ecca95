//! Built-in base tokens the config extends.

use super::ResolvedTheme;
use crate::config::ColorValue;
use indexmap::IndexMap;

const SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
    "\"Segoe UI Symbol\"",
    "\"Noto Color Emoji\"",
];

const SERIF: &[&str] = &[
    "ui-serif",
    "Georgia",
    "Cambria",
    "\"Times New Roman\"",
    "Times",
    "serif",
];

const MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "\"Liberation Mono\"",
    "\"Courier New\"",
    "monospace",
];

const SINGLES: &[(&str, &str)] = &[
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
];

const GRAY: &[(&str, &str)] = &[
    ("50", "#F9FAFB"),
    ("100", "#F3F4F6"),
    ("200", "#E5E7EB"),
    ("300", "#D1D5DB"),
    ("400", "#9CA3AF"),
    ("500", "#6B7280"),
    ("600", "#4B5563"),
    ("700", "#374151"),
    ("800", "#1F2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

const BLUE: &[(&str, &str)] = &[
    ("50", "#EFF6FF"),
    ("100", "#DBEAFE"),
    ("200", "#BFDBFE"),
    ("300", "#93C5FD"),
    ("400", "#60A5FA"),
    ("500", "#3B82F6"),
    ("600", "#2563EB"),
    ("700", "#1D4ED8"),
    ("800", "#1E40AF"),
    ("900", "#1E3A8A"),
    ("950", "#172554"),
];

/// The default theme every config starts from.
pub fn base_theme() -> ResolvedTheme {
    let font_family = [("sans", SANS), ("serif", SERIF), ("mono", MONO)]
        .into_iter()
        .map(|(key, stack)| (key.to_string(), to_strings(stack)))
        .collect();

    let mut colors: IndexMap<String, ColorValue> = SINGLES
        .iter()
        .map(|(name, value)| (name.to_string(), ColorValue::Single(value.to_string())))
        .collect();
    for (family, scale) in [("gray", GRAY), ("blue", BLUE)] {
        let scale = scale
            .iter()
            .map(|(shade, value)| (shade.to_string(), value.to_string()))
            .collect();
        colors.insert(family.to_string(), ColorValue::Scale(scale));
    }

    ResolvedTheme {
        font_family,
        colors,
        other: IndexMap::new(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
