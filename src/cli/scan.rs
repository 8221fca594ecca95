//! `windcfg scan`: list files matched by the content globs.

use std::path::Path;

use anyhow::{Result, bail};

use crate::{config::Config, log, scan::scan, utils::path::normalize_path, utils::plural_count};

/// Print matched files (one per line, relative to the root) to stdout.
pub fn run_scan(config: &Config, root: Option<&Path>) -> Result<()> {
    let root = normalize_path(root.unwrap_or_else(|| config.root()));
    if !root.is_dir() {
        bail!("scan root '{}' is not a directory", root.display());
    }

    let report = scan(&config.content, &root)?;

    for file in &report.files {
        println!("{}", file.display());
    }

    for pattern in &report.unmatched {
        log!("warning"; "pattern `{}` matched no files", pattern);
    }
    log!(
        "scan";
        "{} under {}",
        plural_count(report.files.len(), "file"),
        root.display()
    );

    Ok(())
}
