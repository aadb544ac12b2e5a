//! Utility functions.
//!
//! - [`path`]: Filesystem and link helpers
//! - [`plural`]: Count formatting for summaries

pub mod path;
pub mod plural;

pub use plural::{plural_count, plural_s};
