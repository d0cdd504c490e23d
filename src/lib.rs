//! Typed, immutable configuration for a utility-class CSS build tool.
//!
//! A utility-class build tool scans source files for class-name tokens and
//! emits the matching CSS rules, guided by a configuration record: which
//! files to scan (`content` globs), which colors and font stacks to add on
//! top of its default theme (`theme.extend`), and which plugins to load.
//!
//! This crate models that record as a strongly-typed, immutable value
//! instead of a loosely-typed map, so the shape is checked at compile time
//! and the invariants at load time:
//!
//! - [`StyleConfig`]: the record, with a fluent consuming builder
//! - [`ThemeExtension`]: insertion-ordered colors and font-family stacks
//! - [`preset::dashboard`]: the built-in record shipped with this crate
//!
//! # Example
//!
//! ```rust
//! use stylecfg::StyleConfig;
//!
//! let config = StyleConfig::new()
//!     .content_glob("./src/**/*.html")
//!     .color("primary", "#2C3E50")
//!     .font_family("sans", ["Open Sans", "sans-serif"]);
//!
//! config.validate().unwrap();
//!
//! // Round-trips through the tool's JSON shape unchanged.
//! let reloaded = StyleConfig::from_json_str(&config.to_json_string()).unwrap();
//! assert_eq!(config, reloaded);
//! ```

mod config;
mod emit;
mod load;
pub mod preset;

pub use config::{ConfigError, PluginRef, StyleConfig, ThemeExtension};
pub use load::LoadError;
