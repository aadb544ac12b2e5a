//! Attribute parsing helpers for Config derive macro.

use syn::Attribute;

/// Get key casing from #[config(rename_all = "camelCase")].
pub fn get_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "rename_all")
}

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                // Skip other key = value pairs
                let _ = meta.value()?;
                let _: syn::Lit = meta.input.parse()?;
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `rename_all = "camelCase"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn reads_string_attrs_among_others() {
        let attrs: Vec<Attribute> =
            vec![parse_quote!(#[config(skip, rename_all = "camelCase")])];
        assert_eq!(get_rename_all(&attrs).as_deref(), Some("camelCase"));
    }

    #[test]
    fn detects_flags() {
        let attrs: Vec<Attribute> =
            vec![parse_quote!(#[config(rename_all = "snake_case", skip)])];
        assert!(has_attr(&attrs, "skip"));
        assert!(!has_attr(&attrs, "hidden"));
    }
}
