//! The top-level configuration record.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::theme::{ThemeExtension, ThemeSection};

/// Reference to a build-tool plugin, by module name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// The plugin's module name, as the build tool resolves it.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginRef {
    fn from(name: &str) -> Self {
        PluginRef(name.to_string())
    }
}

impl From<String> for PluginRef {
    fn from(name: String) -> Self {
        PluginRef(name)
    }
}

/// The configuration record read by a utility-class CSS build tool.
///
/// Holds the content globs the tool scans for class names, additive
/// theme entries merged over the tool's defaults, and plugin references.
/// The record is immutable once built: builder methods consume `self`,
/// and there are no mutating accessors.
///
/// # Example
///
/// ```rust
/// use stylecfg::StyleConfig;
///
/// let config = StyleConfig::new()
///     .content_glob("./src/**/*.html")
///     .color("primary", "#2C3E50")
///     .font_family("sans", ["Open Sans", "sans-serif"]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.theme().color("primary"), Some("#2C3E50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    theme: ThemeSection,
    #[serde(default)]
    plugins: Vec<PluginRef>,
}

impl StyleConfig {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a glob pattern to the content scan list.
    ///
    /// Order matters only for scan coverage; earlier globs have no
    /// precedence over later ones.
    pub fn content_glob(mut self, pattern: impl Into<String>) -> Self {
        self.content.push(pattern.into());
        self
    }

    /// Adds a semantic color to the theme extension.
    ///
    /// Re-adding an existing name replaces its value in place.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.extend.add_color(name, value);
        self
    }

    /// Adds a font fallback stack to the theme extension.
    ///
    /// The first family in `stack` is preferred; the rest are fallbacks,
    /// in order.
    pub fn font_family<I, S>(mut self, role: impl Into<String>, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stack = stack.into_iter().map(Into::into).collect();
        self.theme.extend.add_font_family(role, stack);
        self
    }

    /// Appends a plugin reference.
    pub fn plugin(mut self, name: impl Into<PluginRef>) -> Self {
        self.plugins.push(name.into());
        self
    }

    /// The content globs, in scan order.
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    /// The theme extension entries.
    pub fn theme(&self) -> &ThemeExtension {
        &self.theme.extend
    }

    /// The plugin references, in order.
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Validates the record's structural invariants.
    ///
    /// Checks that globs, color names, font roles, family names, and
    /// plugin references are non-empty and that color values are hex
    /// codes. The first violation found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, glob) in self.content.iter().enumerate() {
            if glob.is_empty() {
                return Err(ConfigError::EmptyGlob { index });
            }
        }
        self.theme.extend.validate()?;
        for (index, plugin) in self.plugins.iter().enumerate() {
            if plugin.name().is_empty() {
                return Err(ConfigError::EmptyPlugin { index });
            }
        }
        Ok(())
    }
}
