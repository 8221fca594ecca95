//! Content scanning: expand `content` globs into the set of files the
//! generator reads for class names.
//!
//! Paths are matched relative to the scan root with `./` stripped.
//! `*` stays within one path segment, `**` crosses segments, and a
//! leading `!` excludes. The result is sorted and de-duplicated.

use crate::config::ContentGlobs;
use anyhow::{Context, Result};
use globset::{GlobSet, GlobSetBuilder};
use jwalk::WalkDir;
use std::path::{Path, PathBuf};

/// Directories never descended into.
const IGNORED_DIRS: &[&str] = &[".git", "node_modules"];

/// Outcome of a content scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Matched files, relative to the scan root, sorted.
    pub files: Vec<PathBuf>,
    /// Include patterns (as written) that matched no file once exclusions
    /// were applied.
    pub unmatched: Vec<String>,
}

/// Compiled include/exclude sets.
struct Matcher {
    include: GlobSet,
    /// Raw pattern for each include index, for `unmatched` reporting.
    include_raw: Vec<String>,
    exclude: GlobSet,
}

impl Matcher {
    fn new(content: &ContentGlobs) -> Result<Self> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();
        let mut include_raw = Vec::new();

        for raw in content.patterns() {
            let (negated, pattern) = ContentGlobs::normalize(raw);
            if pattern.is_empty() {
                continue;
            }
            let glob = ContentGlobs::compile(pattern)
                .with_context(|| format!("invalid glob pattern `{raw}`"))?;
            if negated {
                exclude.add(glob);
            } else {
                include.add(glob);
                include_raw.push(raw.clone());
            }
        }

        Ok(Self {
            include: include.build()?,
            include_raw,
            exclude: exclude.build()?,
        })
    }
}

/// Scan `root` for files matching `content`.
pub fn scan(content: &ContentGlobs, root: &Path) -> Result<ScanReport> {
    let matcher = Matcher::new(content)?;
    let mut hit = vec![false; matcher.include_raw.len()];
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .process_read_dir(|_, _, _, children| {
            children.retain(|entry| {
                entry.as_ref().map_or(true, |e| {
                    !(e.file_type().is_dir()
                        && e.file_name()
                            .to_str()
                            .is_some_and(|name| IGNORED_DIRS.contains(&name)))
                })
            });
        });

    for entry in walker.into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };

        if matcher.exclude.is_match(rel) {
            continue;
        }
        let matches = matcher.include.matches(rel);
        if matches.is_empty() {
            continue;
        }
        for i in matches {
            hit[i] = true;
        }
        files.push(rel.to_path_buf());
    }

    files.sort();
    files.dedup();

    let unmatched = matcher
        .include_raw
        .into_iter()
        .zip(hit)
        .filter_map(|(raw, hit)| (!hit).then_some(raw))
        .collect();

    crate::debug!("scan"; "{} file(s) matched under {}", files.len(), root.display());

    Ok(ScanReport { files, unmatched })
}
