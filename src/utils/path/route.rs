//! Link helpers.
//!
//! - Leading slash handling
//! - Link type detection (external vs internal)

/// Strip leading slash from a URL path
///
/// # Examples
/// ```
/// use docsite::utils::path::strip_leading_slash;
/// assert_eq!(strip_leading_slash("/docs/intro"), "docs/intro");
/// assert_eq!(strip_leading_slash("docs/intro"), "docs/intro");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(url: &str) -> &str {
    url.trim_start_matches('/')
}

/// Check whether a link carries a scheme (`https:`, `mailto:`, ...).
///
/// # Examples
/// ```
/// use docsite::utils::path::is_external_link;
/// assert!(is_external_link("https://github.com/reasonml-community"));
/// assert!(!is_external_link("docs/introduction"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/docs/changelog"), "docs/changelog");
        assert_eq!(strip_leading_slash("docs/changelog"), "docs/changelog");
        assert_eq!(strip_leading_slash("/"), "");
        assert_eq!(strip_leading_slash(""), "");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/docs/intro"));
        assert!(!is_external_link("./sidebars.js"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nothing"));
    }
}
