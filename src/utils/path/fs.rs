//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_under` - resolve a config reference against a base directory

use std::path::{Path, PathBuf};

use super::route::strip_leading_slash;

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path written in the config against `base`.
///
/// Absolute filesystem paths are kept. A leading `/` on anything else is
/// treated as "relative to `base`", which is how the build tool reads
/// favicon and logo paths under its static directory.
///
/// # Example
/// ```ignore
/// resolve_under("./sidebars.js", root)      -> root/sidebars.js
/// resolve_under("/img/logo.svg", static_dir) -> static_dir/img/logo.svg
/// ```
pub fn resolve_under(reference: &str, base: &Path) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() && path.exists() {
        return path.to_path_buf();
    }
    let relative = strip_leading_slash(reference);
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    base.join(relative)
}
