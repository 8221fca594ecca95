//! `content` globs: the files the generator scans for class names.
//!
//! # Example
//!
//! ```toml
//! content = [
//!     "./templates/**/*.html",
//!     "./**/*.html",
//!     "!./node_modules/**",
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use globset::{Glob, GlobBuilder};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Ordered list of glob patterns.
///
/// Order is kept for display only; scan output has set semantics.
/// A leading `!` turns a pattern into an exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGlobs(Vec<String>);

impl ContentGlobs {
    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Split a raw pattern into `(negated, pattern)` with `./` stripped.
    pub fn normalize(raw: &str) -> (bool, &str) {
        let raw = raw.trim();
        let (negated, rest) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        (negated, rest.trim_start_matches("./"))
    }

    /// Compile one normalized pattern the way the scanner matches it:
    /// `*` stays inside one path segment, `**` crosses segments.
    pub fn compile(pattern: &str) -> Result<Glob, globset::Error> {
        GlobBuilder::new(pattern).literal_separator(true).build()
    }

    /// Validate the pattern list.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("content");

        if self.0.is_empty() {
            diag.error_with_hint(
                field,
                "at least one glob pattern is required",
                r#"e.g. content = ["./templates/**/*.html"]"#,
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for (i, raw) in self.0.iter().enumerate() {
            let path = field.index(i);
            let (negated, pattern) = Self::normalize(raw);

            if pattern.is_empty() {
                let message = if negated {
                    "exclusion has no pattern after `!`"
                } else {
                    "glob pattern is empty"
                };
                diag.error(path, message);
                continue;
            }

            if let Err(e) = Self::compile(pattern) {
                diag.error(path, format!("invalid glob pattern `{raw}`: {}", e.kind()));
                continue;
            }

            if !seen.insert((negated, pattern)) {
                diag.warn(path, format!("duplicate pattern `{raw}`"));
            }
        }

        if self.0.iter().all(|raw| Self::normalize(raw).0) {
            diag.error(field, "all patterns are exclusions, nothing would be scanned");
        }
    }
}

impl From<Vec<&str>> for ContentGlobs {
    fn from(patterns: Vec<&str>) -> Self {
        Self(patterns.into_iter().map(str::to_string).collect())
    }
}
