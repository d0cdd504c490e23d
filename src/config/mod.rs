//! The typed configuration record.
//!
//! This module provides the core types:
//!
//! - [`StyleConfig`]: The top-level configuration record
//! - [`ThemeExtension`]: Additive color and font-family theme entries
//! - [`PluginRef`]: A reference to a build-tool plugin
//! - [`ConfigError`]: Errors from invariant validation
//!
//! A config is built once with the fluent builder API and never mutated
//! afterwards; the consuming build tool reads it at build time and merges
//! it with its own defaults.

#[allow(clippy::module_inception)]
mod config;
mod error;
mod theme;

pub use config::{PluginRef, StyleConfig};
pub use error::ConfigError;
pub use theme::ThemeExtension;
