//! Theme extension entries: colors and font-family stacks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The `theme` section of the wire format.
///
/// The consuming build tool distinguishes replacing its default theme from
/// extending it; everything in this crate lives under `extend`, so defaults
/// are always preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSection {
    pub(crate) extend: ThemeExtension,
}

/// Additive theme entries merged over the build tool's default theme.
///
/// Both maps preserve insertion order, so the authored key order survives
/// a serialize/parse round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtension {
    /// Semantic color name to hex value.
    #[serde(default)]
    colors: IndexMap<String, String>,
    /// Font role to fallback stack. The first entry is the preferred
    /// family; later entries are fallbacks, in order.
    #[serde(default, rename = "fontFamily")]
    font_family: IndexMap<String, Vec<String>>,
}

impl ThemeExtension {
    /// Creates an empty extension.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_color(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.colors.insert(name.into(), value.into());
    }

    pub(crate) fn add_font_family(&mut self, role: impl Into<String>, stack: Vec<String>) {
        self.font_family.insert(role.into(), stack);
    }

    /// Looks up a color value by semantic name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|s| s.as_str())
    }

    /// Looks up a font fallback stack by role.
    pub fn font_stack(&self, role: &str) -> Option<&[String]> {
        self.font_family.get(role).map(|v| v.as_slice())
    }

    /// All colors, in authored order.
    pub fn colors(&self) -> &IndexMap<String, String> {
        &self.colors
    }

    /// All font stacks, in authored order.
    pub fn font_families(&self) -> &IndexMap<String, Vec<String>> {
        &self.font_family
    }

    /// Returns true if the extension adds nothing.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.font_family.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in &self.colors {
            if name.is_empty() {
                return Err(ConfigError::EmptyColorName);
            }
            if !is_hex_color(value) {
                return Err(ConfigError::MalformedColor {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
        for (role, stack) in &self.font_family {
            if role.is_empty() {
                return Err(ConfigError::EmptyFontRole);
            }
            if stack.is_empty() {
                return Err(ConfigError::EmptyFontStack { role: role.clone() });
            }
            if stack.iter().any(|family| family.is_empty()) {
                return Err(ConfigError::EmptyFontName { role: role.clone() });
            }
        }
        Ok(())
    }
}

/// Checks for a `#rgb` or `#rrggbb` hex color, case-insensitive.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#2C3E50"));
        assert!(is_hex_color("#27ae60"));
        assert!(is_hex_color("#abc"));
        assert!(!is_hex_color("2C3E50"));
        assert!(!is_hex_color("#2C3E5"));
        assert!(!is_hex_color("#salmon"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_extension_preserves_insertion_order() {
        let mut ext = ThemeExtension::new();
        ext.add_color("primary", "#2C3E50");
        ext.add_color("secondary", "#FF5A5F");
        ext.add_color("info", "#3498db");

        let names: Vec<&str> = ext.colors().keys().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["primary", "secondary", "info"]);
    }

    #[test]
    fn test_extension_duplicate_key_last_wins() {
        let mut ext = ThemeExtension::new();
        ext.add_color("primary", "#000000");
        ext.add_color("primary", "#2C3E50");

        assert_eq!(ext.colors().len(), 1);
        assert_eq!(ext.color("primary"), Some("#2C3E50"));
    }

    #[test]
    fn test_extension_font_stack_order() {
        let mut ext = ThemeExtension::new();
        ext.add_font_family("sans", vec!["Open Sans".into(), "sans-serif".into()]);

        let stack = ext.font_stack("sans").unwrap();
        assert_eq!(stack, ["Open Sans", "sans-serif"]);
    }

    #[test]
    fn test_validate_rejects_malformed_color() {
        let mut ext = ThemeExtension::new();
        ext.add_color("primary", "rebeccapurple");

        assert_eq!(
            ext.validate(),
            Err(ConfigError::MalformedColor {
                name: "primary".to_string(),
                value: "rebeccapurple".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_font_stack() {
        let mut ext = ThemeExtension::new();
        ext.add_font_family("mono", Vec::new());

        assert_eq!(
            ext.validate(),
            Err(ConfigError::EmptyFontStack {
                role: "mono".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_extension() {
        let ext = ThemeExtension::new();
        assert!(ext.is_empty());
        assert!(ext.validate().is_ok());
        assert_eq!(ext.color("primary"), None);
        assert_eq!(ext.font_stack("sans"), None);
    }
}
