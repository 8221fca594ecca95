//! `windcfg check`: validate and summarize.

use anyhow::Result;

use crate::{config::Config, debug, log, theme::resolve, utils::plural_count};

/// Print a one-line summary of a config that passed validation.
pub fn run_check(config: &Config) -> Result<()> {
    log!("check"; "{} is valid", config.config_path.display());
    log!("check"; "{}", summary(config));

    for plugin in &config.plugins {
        match plugin.options() {
            Some(options) => debug!("check"; "plugin {} with options {}", plugin.name(), options),
            None => debug!("check"; "plugin {}", plugin.name()),
        }
    }
    Ok(())
}

fn summary(config: &Config) -> String {
    let extend = &config.theme.extend;
    let families = extend.colors.as_ref().map_or(0, |c| c.len());
    let stacks = extend.font_family.as_ref().map_or(0, |f| f.len());
    let resolved = resolve(&config.theme);

    format!(
        "{}, {} and {} extended, {} after merge, {}",
        plural_count(config.content.len(), "content pattern"),
        plural_count(families, "color group"),
        plural_count(stacks, "font stack"),
        plural_count(resolved.color_count(), "color"),
        plural_count(config.plugins.len(), "plugin"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary() {
        let config = test_parse_config(
            r##"
content = ["./templates/**/*.html", "./**/*.html"]

[theme.extend.fontFamily]
sans = ["Inter"]

[theme.extend.colors.brand]
500 = "#FF9900"
"##,
        );
        let text = summary(&config);
        assert!(text.starts_with("2 content patterns, 1 color group"));
        assert!(text.contains("1 font stack "));
        // base 26 colors + 1 new shade
        assert!(text.contains("27 colors after merge"));
        assert!(text.ends_with("0 plugins"));
    }
}
