//! Config file format detection.

use super::ConfigError;
use std::path::Path;

/// On-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Well-known file name for this format.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Toml => "windcfg.toml",
            Self::Json => "windcfg.json",
        }
    }

    /// All well-known file names, in discovery order.
    pub const fn well_known() -> [&'static str; 2] {
        [Self::Toml.file_name(), Self::Json.file_name()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("windcfg.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/theme.JSON")).unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConfigFormat::from_path(Path::new("tailwind.config.js")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        assert!(ConfigFormat::from_path(Path::new("windcfg")).is_err());
    }
}
