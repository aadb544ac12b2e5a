//! Configuration utility functions.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use super::FieldPath;

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://graphql-ppx.com")               -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;

    // Get path and trim leading/trailing slashes
    let path = parsed.path().trim_matches('/');

    Some(path.to_string())
}

/// Find a config file by searching upward from the current directory
///
/// Each directory is searched for every candidate name in order.
///
/// # Example
/// ```text
/// /home/user/site/docs/guides/  ← cwd
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(candidates: &[&Path]) -> Option<PathBuf> {
    for name in candidates {
        if name.is_absolute() {
            return name.exists().then(|| name.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        for name in candidates {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// serde paths
// ============================================================================

/// Convert a `serde_path_to_error` path (`navbar[0]`) to a field path.
pub fn error_path(path: &serde_path_to_error::Path) -> FieldPath {
    use serde_path_to_error::Segment;

    let mut out = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => {
                let _ = write!(out, "[{index}]");
            }
            Segment::Map { key } => push_key(&mut out, key),
            _ => {}
        }
    }
    FieldPath::owned(out)
}

/// Convert a `serde_ignored` path to a field path plus its last key.
pub fn ignored_path(path: &serde_ignored::Path) -> (FieldPath, String) {
    let mut out = String::new();
    let key = build_ignored(path, &mut out).unwrap_or_default();
    (FieldPath::owned(out), key)
}

fn build_ignored(path: &serde_ignored::Path, out: &mut String) -> Option<String> {
    use serde_ignored::Path;

    match path {
        Path::Root => None,
        Path::Seq { parent, index } => {
            build_ignored(parent, out);
            let _ = write!(out, "[{index}]");
            None
        }
        Path::Map { parent, key } => {
            build_ignored(parent, out);
            push_key(out, key);
            Some(key.clone())
        }
        Path::Some { parent } | Path::NewtypeStruct { parent } | Path::NewtypeVariant { parent } => {
            build_ignored(parent, out)
        }
    }
}

fn push_key(out: &mut String, key: &str) {
    if !out.is_empty() {
        out.push('.');
    }
    out.push_str(key);
}

/// Name of the field in a serde "missing field `x`" message.
pub fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .strip_suffix('`')
}

/// Suggest a known key that differs only in casing or separators.
///
/// `base_url` -> `baseUrl`, `DarkTheme` -> `darkTheme`
pub fn suggest_key<'a>(unknown: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let wanted = squash(unknown);
    known
        .into_iter()
        .find(|candidate| *candidate != unknown && squash(candidate) == wanted)
}

fn squash(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// tests
// ============================================================================
