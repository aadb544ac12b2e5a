//! docsite - configuration loader and validator for documentation sites.
//!
//! The build tool consumes one declarative config (title, URL, navbar,
//! footer, highlight themes and preset wiring). This crate loads it from
//! JSON or TOML, rejects anything the tool would choke on, and writes it
//! back in the same shape.
//!
//! ```
//! use docsite::config::SiteConfig;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "title": "Graphql-ppx",
//!     "url": "https://graphql-ppx.com",
//!     "baseUrl": "/",
//!     "navbar": [{ "to": "docs/introduction", "label": "Docs", "position": "left" }]
//! });
//! let config = SiteConfig::load(&raw).unwrap();
//! assert_eq!(config.navbar_links()[0].label, "Docs");
//! assert_eq!(config.to_value(), raw);
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;
