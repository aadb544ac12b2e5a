//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and the list of raw keys for a config record.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(rename_all = "camelCase")]
//! pub struct SiteConfig {
//!     pub title: String,
//!
//!     /// Path prefix the site is served under.
//!     pub base_url: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub root: PathBuf,
//! }
//!
//! // Generates:
//! // - SiteConfig::FIELDS.base_url -> FieldPath("baseUrl")
//! // - SiteConfig::KEYS            -> &["title", "baseUrl"]
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(rename_all = "camelCase")]` - raw key casing (`camelCase` or `snake_case`)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and KEYS (internal use)
//!
//! # Paths
//!
//! Paths are relative (`label`). Callers join them onto the location of the
//! record (`navbar[2]` + `label`).

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and KEYS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
