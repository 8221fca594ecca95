//! Configuration utility functions.

use super::ConfigFormat;
use std::path::{Path, PathBuf};

/// Find a config file by searching upward from `start`.
///
/// Each directory is checked for the well-known names in order
/// (`windcfg.toml`, then `windcfg.json`). Returns the first hit.
///
/// # Example
/// ```text
/// /home/user/site/templates/partials/  ← start
/// /home/user/site/windcfg.toml         ← found!
/// ```
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        for name in ConfigFormat::well_known() {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("templates/partials");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("windcfg.toml"), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("windcfg.toml"));
    }

    #[test]
    fn test_toml_preferred_over_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("windcfg.json"), "{}").unwrap();
        fs::write(dir.path().join("windcfg.toml"), "").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "windcfg.toml");
    }

    #[test]
    fn test_nearest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("windcfg.toml"), "").unwrap();
        fs::write(nested.join("windcfg.json"), "{}").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, nested.join("windcfg.json"));
    }

    #[test]
    fn test_directory_named_like_config_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("windcfg.toml")).unwrap();
        fs::write(dir.path().join("windcfg.json"), "{}").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "windcfg.json");
    }
}
