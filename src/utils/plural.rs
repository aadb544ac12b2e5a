//! Count formatting for summary lines (`3 navbar links`, `1 preset`).

/// "s" suffix for anything but exactly one
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun: `plural_count(2, "preset")` -> `"2 presets"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "footer section"), "0 footer sections");
        assert_eq!(plural_count(1, "navbar link"), "1 navbar link");
        assert_eq!(plural_count(3, "preset"), "3 presets");
    }
}
