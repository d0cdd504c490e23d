//! Emitting the record as the build tool's config file.
//!
//! Utility-class build tools read their configuration as a CommonJS
//! `module.exports` object. This module renders a [`StyleConfig`] in that
//! layout: 4-space indent, double-quoted strings, trailing commas on
//! multi-line entries.

use crate::config::StyleConfig;

impl StyleConfig {
    /// Renders the record as a `module.exports` config file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecfg::StyleConfig;
    ///
    /// let config = StyleConfig::new().content_glob("./src/**/*.html");
    /// let js = config.to_config_js();
    /// assert!(js.starts_with("module.exports = {"));
    /// assert!(js.contains(r#"content: ["./src/**/*.html"],"#));
    /// ```
    pub fn to_config_js(&self) -> String {
        let mut out = String::new();
        out.push_str("module.exports = {\n");

        out.push_str(&format!(
            "    content: [{}],\n",
            join_quoted(self.content_globs())
        ));

        out.push_str("    theme: {\n");
        out.push_str("        extend: {\n");
        out.push_str(&emit_colors(self));
        out.push_str(&emit_font_families(self));
        out.push_str("        },\n");
        out.push_str("    },\n");

        out.push_str(&emit_plugins(self));
        out.push_str("};\n");
        out
    }
}

fn emit_colors(config: &StyleConfig) -> String {
    let colors = config.theme().colors();
    if colors.is_empty() {
        return "            colors: {},\n".to_string();
    }
    let mut out = String::from("            colors: {\n");
    for (name, value) in colors {
        out.push_str(&format!("                {}: \"{}\",\n", name, value));
    }
    out.push_str("            },\n");
    out
}

fn emit_font_families(config: &StyleConfig) -> String {
    let families = config.theme().font_families();
    if families.is_empty() {
        return "            fontFamily: {},\n".to_string();
    }
    let mut out = String::from("            fontFamily: {\n");
    for (role, stack) in families {
        out.push_str(&format!(
            "                {}: [{}],\n",
            role,
            join_quoted(stack)
        ));
    }
    out.push_str("            },\n");
    out
}

fn emit_plugins(config: &StyleConfig) -> String {
    if config.plugins().is_empty() {
        return "    plugins: [],\n".to_string();
    }
    let requires: Vec<String> = config
        .plugins()
        .iter()
        .map(|p| format!("require(\"{}\")", p.name()))
        .collect();
    format!("    plugins: [{}],\n", requires.join(", "))
}

fn join_quoted(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{}\"", s)).collect();
    quoted.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_layout() {
        let js = StyleConfig::new().to_config_js();

        assert_eq!(
            js,
            "module.exports = {\n    \
             content: [],\n    \
             theme: {\n        \
             extend: {\n            \
             colors: {},\n            \
             fontFamily: {},\n        \
             },\n    \
             },\n    \
             plugins: [],\n\
             };\n"
        );
    }

    #[test]
    fn test_colors_one_per_line() {
        let js = StyleConfig::new()
            .color("primary", "#2C3E50")
            .color("secondary", "#FF5A5F")
            .to_config_js();

        assert!(js.contains("                primary: \"#2C3E50\",\n"));
        assert!(js.contains("                secondary: \"#FF5A5F\",\n"));
    }

    #[test]
    fn test_font_stack_inline() {
        let js = StyleConfig::new()
            .font_family("sans", ["Open Sans", "sans-serif"])
            .to_config_js();

        assert!(js.contains("sans: [\"Open Sans\", \"sans-serif\"],"));
    }

    #[test]
    fn test_plugins_rendered_as_requires() {
        let js = StyleConfig::new()
            .plugin("@tailwindcss/forms")
            .to_config_js();

        assert!(js.contains("plugins: [require(\"@tailwindcss/forms\")],"));
    }
}
