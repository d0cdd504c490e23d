//! Loading and serializing the record in its external JSON shape.
//!
//! The wire format mirrors the consuming build tool's schema:
//!
//! ```json
//! {
//!     "content": ["./assets/**/*.{html,js}"],
//!     "theme": { "extend": { "colors": {}, "fontFamily": {} } },
//!     "plugins": []
//! }
//! ```
//!
//! Loading is a one-shot, synchronous read; the returned record owns all
//! of its data, so loading the same source twice yields two independent,
//! deep-equal values.

use std::path::{Path, PathBuf};

use crate::config::StyleConfig;

/// Error type for loading a config from JSON.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the config file from disk.
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },
    /// The JSON did not match the config schema.
    Parse {
        /// Error message from the parser
        message: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read { path, message } => {
                write!(f, "failed to read config \"{}\": {}", path.display(), message)
            }
            LoadError::Parse { message } => write!(f, "failed to parse config: {}", message),
        }
    }
}

impl std::error::Error for LoadError {}

impl StyleConfig {
    /// Parses a config from its JSON wire form.
    ///
    /// Missing sections default to empty. Unknown keys are ignored;
    /// rejecting them is the consuming tool's job.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the JSON is malformed or a value
    /// has the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Parse {
            message: e.to_string(),
        })
    }

    /// Reads and parses a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read, or
    /// [`LoadError::Parse`] if its content is not a valid config.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Serializes the record to compact JSON.
    ///
    /// Map entries are written in authored order, so parsing the output
    /// back yields a record deep-equal to this one.
    pub fn to_json_string(&self) -> String {
        // Serialization of string keys and values cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
