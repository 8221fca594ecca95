//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, shown only with `--verbose`
//!
//! Logs go to stderr so `show` and `scan` output can be piped.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} content patterns", count);
//! debug!("scan"; "walking {}", root.display());
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt::Display,
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "check" | "init" | "token" => Style::new().bright_green(),
        "scan" => Style::new().bright_blue(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    paint(format!("[{module}]"), style.bold())
}

/// Style `value` for stderr, honoring `--color` and whether stderr is a terminal.
pub fn paint(value: impl Display, style: Style) -> String {
    value
        .if_supports_color(Stream::Stderr, |v| v.style(style))
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        let prefix = colorize_prefix("scan", "scan");
        assert!(prefix.contains("[scan]"));
    }

    #[test]
    fn test_color_never_emits_plain_text() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("check", "check"), "[check]");
        assert_eq!(paint("hint:", Style::new().yellow()), "hint:");

        let mut diag = crate::config::ConfigDiagnostics::new();
        diag.error(
            crate::config::FieldPath::new("theme.extend.colors.blue.500"),
            "not a valid hex color",
        );
        assert!(!diag.to_string().contains('\x1b'));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
