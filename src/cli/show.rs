//! `windcfg show`: print the loaded or resolved configuration.

use anyhow::Result;

use crate::config::{Config, ConfigFormat};
use crate::theme::ResolvedConfig;

/// Print the config to stdout.
pub fn run_show(config: &Config, resolved: bool, format: ConfigFormat) -> Result<()> {
    print!("{}", render(config, resolved, format)?);
    Ok(())
}

fn render(config: &Config, resolved: bool, format: ConfigFormat) -> Result<String> {
    if !resolved {
        return config.render(format);
    }

    let resolved = ResolvedConfig::new(config);
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(&resolved)?,
        ConfigFormat::Json => serde_json::to_string_pretty(&resolved)? + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn config() -> Config {
        test_parse_config(
            r##"
content = ["./templates/**/*.html"]

[theme.extend.colors.blue]
500 = "#FF9900"
"##,
        )
    }

    #[test]
    fn test_show_loaded_json() {
        let text = render(&config(), false, ConfigFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["theme"]["extend"]["colors"]["blue"]["500"], "#FF9900");
        assert_eq!(value["plugins"], serde_json::json!([]));
    }

    #[test]
    fn test_show_resolved_includes_base() {
        let text = render(&config(), true, ConfigFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["theme"]["colors"]["blue"]["500"], "#FF9900");
        assert_eq!(value["theme"]["colors"]["blue"]["950"], "#172554");
        assert!(value["theme"]["fontFamily"]["mono"].is_array());
    }

    #[test]
    fn test_show_resolved_toml_parses() {
        let text = render(&config(), true, ConfigFormat::Toml).unwrap();
        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(
            value["theme"]["colors"]["black"].as_str(),
            Some("#000000")
        );
    }
}
