//! Field information structures and parsing.

use crate::config::attr::has_attr;
use crate::config::types::Casing;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub raw_name: String,
    pub skip: bool,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field, casing: Casing) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        // `r#type` style identifiers keep their bare name
        let ident_str = ident.to_string();
        let bare = ident_str.strip_prefix("r#").unwrap_or(&ident_str);

        Some(Self {
            name: ident.clone(),
            raw_name: casing.apply(bare),
            skip: has_attr(attrs, "skip"),
        })
    }
}
