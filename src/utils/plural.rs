//! Pluralization for log messages.

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "file")` -> `"1 file"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "plugin"), "0 plugins");
        assert_eq!(plural_count(1, "plugin"), "1 plugin");
        assert_eq!(plural_count(11, "shade"), "11 shades");
    }
}
