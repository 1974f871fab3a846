//! Error types for reading and writing packages.

use thiserror::Error;

/// Errors that can occur while reading or writing interchange data.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML documentation parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP package archive error.
    #[error("Archive error: {0}")]
    Archive(String),

    /// JSON image parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML image parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally invalid input.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// Unsupported feature or format variant.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an invalid package error.
    pub fn invalid_package(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "package",
            message: message.into(),
        }
    }

    /// The error every reader returns when built without the feature.
    pub(crate) fn feature_disabled(what: &str) -> Self {
        Self::Unsupported(format!("{what} requires the 'interchange' feature"))
    }
}
