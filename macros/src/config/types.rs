//! Key casing helpers for Config derive macro.

/// Raw key casing selected by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Snake,
    Camel,
}

impl Casing {
    /// Convert a snake_case Rust field name to the raw key.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Snake => name.to_string(),
            Self::Camel => to_camel_case(name),
        }
    }
}

/// Convert snake_case to camelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("base_url"), "baseUrl");
        assert_eq!(to_camel_case("organization_name"), "organizationName");
        assert_eq!(to_camel_case("hide_on_scroll"), "hideOnScroll");
        assert_eq!(to_camel_case("title"), "title");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn test_casing_apply() {
        assert_eq!(Casing::Snake.apply("dark_theme"), "dark_theme");
        assert_eq!(Casing::Camel.apply("dark_theme"), "darkTheme");
    }
}
