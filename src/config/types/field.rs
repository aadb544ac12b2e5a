//! Config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Location of a key inside the raw config (e.g. `navbar.links[0].label`).
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(rename_all = "camelCase")]
/// pub struct SiteConfig {
///     pub base_url: String,
/// }
///
/// diag.error(SiteConfig::FIELDS.base_url, "must start with `/`");
/// ```
///
/// Paths into lists are built at runtime with [`FieldPath::index`] and
/// [`FieldPath::join`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    /// Path of the document root.
    pub const ROOT: FieldPath = FieldPath::new("");

    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a relative path: `navbar` + `links` -> `navbar.links`.
    pub fn join(&self, child: &FieldPath) -> FieldPath {
        match (self.is_root(), child.is_root()) {
            (true, _) => child.clone(),
            (_, true) => self.clone(),
            _ => Self::owned(format!("{}.{}", self.0, child.0)),
        }
    }

    /// Append a list index: `navbar` + 2 -> `navbar[2]`.
    pub fn index(&self, i: usize) -> FieldPath {
        Self::owned(format!("{}[{i}]", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_root() { "<root>" } else { self.as_str() };
        write!(f, "{}", format_args!("`{shown}`").bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
