//! Configuration invariant errors.

/// Error returned when a config violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A content glob pattern is empty.
    EmptyGlob { index: usize },
    /// A color is keyed by an empty name.
    EmptyColorName,
    /// A color value is not a `#rgb` or `#rrggbb` hex code.
    MalformedColor { name: String, value: String },
    /// A font stack is keyed by an empty role name.
    EmptyFontRole,
    /// A font role maps to an empty fallback stack.
    EmptyFontStack { role: String },
    /// A font stack contains an empty family name.
    EmptyFontName { role: String },
    /// A plugin reference is the empty string.
    EmptyPlugin { index: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyGlob { index } => {
                write!(f, "content glob at position {} is empty", index)
            }
            ConfigError::EmptyColorName => write!(f, "theme color with empty name"),
            ConfigError::MalformedColor { name, value } => {
                write!(f, "color '{}' has malformed hex value '{}'", name, value)
            }
            ConfigError::EmptyFontRole => write!(f, "font stack with empty role name"),
            ConfigError::EmptyFontStack { role } => {
                write!(f, "font role '{}' has an empty fallback stack", role)
            }
            ConfigError::EmptyFontName { role } => {
                write!(f, "font role '{}' contains an empty family name", role)
            }
            ConfigError::EmptyPlugin { index } => {
                write!(f, "plugin reference at position {} is empty", index)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
