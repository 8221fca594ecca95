//! Dotted config key paths.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// Dotted path to a config key (e.g. `theme.extend.colors.blue.500`).
///
/// Built up while walking the loaded structure so every diagnostic can
/// point at the exact key that produced it.
///
/// # Example
///
/// ```ignore
/// let colors = FieldPath::new("theme.extend.colors");
/// let shade = colors.join("blue").join("500");
/// assert_eq!(shade.as_str(), "theme.extend.colors.blue.500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a segment, returning the child path.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref();
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{}", self.0, segment))
        }
    }

    /// Child path for a sequence element (`content[2]`).
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", paint(format!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_nested() {
        let path = FieldPath::new("theme").join("extend").join("colors");
        assert_eq!(path.as_str(), "theme.extend.colors");
    }

    #[test]
    fn test_join_from_empty() {
        assert_eq!(FieldPath::new("").join("plugins").as_str(), "plugins");
    }

    #[test]
    fn test_index() {
        assert_eq!(FieldPath::new("content").index(2).as_str(), "content[2]");
    }
}
