//! Built-in configuration presets.

use once_cell::sync::Lazy;

use crate::config::StyleConfig;

static DASHBOARD: Lazy<StyleConfig> = Lazy::new(|| {
    StyleConfig::new()
        .content_glob("./assets/**/*.{html,js}")
        .content_glob("./components/**/*.py")
        .content_glob("./**/*.py")
        .color("primary", "#2C3E50")
        .color("secondary", "#FF5A5F")
        .color("success", "#27ae60")
        .color("danger", "#e74c3c")
        .color("info", "#3498db")
        .font_family("sans", ["Open Sans", "sans-serif"])
});

/// The dashboard preset: semantic status colors over an Open Sans stack,
/// scanning component sources and static assets for class names.
///
/// Each call returns an owned clone; callers never share state.
///
/// # Example
///
/// ```rust
/// use stylecfg::preset;
///
/// let config = preset::dashboard();
/// assert_eq!(config.theme().color("danger"), Some("#e74c3c"));
/// assert!(config.plugins().is_empty());
/// ```
pub fn dashboard() -> StyleConfig {
    DASHBOARD.clone()
}
