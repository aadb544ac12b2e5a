//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key of the site config:
//!
//! | Module   | Key        | Purpose                                   |
//! |----------|------------|-------------------------------------------|
//! | `link`   | -          | Link entries shared by navbar and footer  |
//! | `navbar` | `navbar`   | Top navigation bar                        |
//! | `footer` | `footer`   | Footer link columns                       |
//! | `prism`  | `prism`    | Syntax-highlight theme selection          |
//! | `preset` | `presets`  | Preset names and pass-through options     |
//! | `theme`  | `themeConfig` | Wrapper holding navbar, footer and prism |

mod footer;
mod link;
mod navbar;
mod preset;
mod prism;
mod theme;

pub use footer::{FooterConfig, FooterObject, FooterSection, FooterStyle};
pub use link::{LinkTarget, NavLink, NavPosition, validate_links};
pub use navbar::{LogoConfig, NavbarConfig, NavbarObject};
pub use preset::PresetEntry;
pub use prism::{KNOWN_PRISM_THEMES, PrismConfig};
pub use theme::ThemeConfig;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// optional keys
// ============================================================================

/// `deserialize_with` for optional keys: absent is `None`, `null` is rejected.
///
/// Pair with `#[serde(default)]`. Output omits `None`, so accepting `null`
/// would load a value that cannot be written back.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// list-or-table shape
// ============================================================================

/// Visitor for sections written either as a bare list or as a table.
///
/// `navbar = [...]` and `[navbar] links = [...]` both describe a navbar;
/// the variant that was read is kept so output matches input.
pub(crate) struct ListOrTable<L, T, R> {
    expecting: &'static str,
    list: fn(Vec<L>) -> R,
    table: fn(T) -> R,
    marker: PhantomData<fn() -> (L, T)>,
}

impl<L, T, R> ListOrTable<L, T, R> {
    pub(crate) fn new(expecting: &'static str, list: fn(Vec<L>) -> R, table: fn(T) -> R) -> Self {
        Self {
            expecting,
            list,
            table,
            marker: PhantomData,
        }
    }
}

impl<'de, L, T, R> Visitor<'de> for ListOrTable<L, T, R>
where
    L: Deserialize<'de>,
    T: Deserialize<'de>,
{
    type Value = R;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<R, A::Error> {
        Vec::<L>::deserialize(SeqAccessDeserializer::new(seq)).map(self.list)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<R, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(self.table)
    }
}

/// Shape check for a nested string inside an opaque options table.
pub(crate) fn expect_str<'a>(
    value: &'a serde_json::Value,
    field: &crate::config::FieldPath,
    diag: &mut crate::config::ConfigDiagnostics,
) -> Option<&'a str> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            diag.error(field.clone(), "must not be empty");
            None
        }
        None => {
            diag.error(field.clone(), format!("expected a string, found {}", kind_of(value)));
            None
        }
    }
}

/// Human name of a JSON value kind for diagnostics.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a table",
    }
}
