//! Error types for configuration and reference-table loading.
//!
//! Calculation itself never fails: missing tea fields, unrecognized
//! categories and all-zero results are resolved inside the scorers. Every
//! variant here is raised while loading or validating configuration, before
//! any tea record is processed.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for teaeffect operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid weights, thresholds or floors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A table entry, projection or interaction rule names an effect
    /// missing from the vocabulary
    #[error("Unknown effect '{effect}' referenced by {context}")]
    UnknownEffect { context: String, effect: String },

    /// A gradient, soil, climate or projection entry names an element
    /// missing from `elements.names`
    #[error("Unknown element '{element}' referenced by {context}")]
    UnknownElement { context: String, element: String },

    /// Structurally invalid reference table
    #[error("Invalid {table} table: {message}")]
    InvalidTable { table: String, message: String },

    /// TOML parse errors
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: toml::de::Error,
    },

    /// File system errors
    #[error("File system error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unknown-effect error with the referencing location
    pub fn unknown_effect(context: impl Into<String>, effect: impl Into<String>) -> Self {
        Self::UnknownEffect {
            context: context.into(),
            effect: effect.into(),
        }
    }

    /// Create an unknown-element error with the referencing location
    pub fn unknown_element(context: impl Into<String>, element: impl Into<String>) -> Self {
        Self::UnknownElement {
            context: context.into(),
            element: element.into(),
        }
    }

    /// Create an invalid-table error
    pub fn invalid_table(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTable {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a parse error for the named source
    pub fn parse(what: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can fix this error by editing a configuration or
    /// reference file.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type alias for teaeffect operations
pub type Result<T> = std::result::Result<T, Error>;
