//! Path and link utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_under`)
//! - [`route`]: Link helpers (`is_external_link`, `strip_leading_slash`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, resolve_under};
pub use route::{is_external_link, strip_leading_slash};
