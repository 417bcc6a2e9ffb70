//! Error types for prosemirror2html.

use std::io;
use thiserror::Error;

/// Result type alias for prosemirror2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input payload is not valid document JSON.
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The root node is not of type `doc`.
    #[error("Not a document root node: found type '{0}'")]
    NotADocument(String),

    /// A node type has no registered tags.
    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    /// A mark type has no registered tags.
    #[error("Unknown mark '{0}'")]
    UnknownMark(String),

    /// A tag failed to render its markup.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The document nests deeper than the configured limit.
    #[error("Document exceeds maximum nesting depth of {0}")]
    DepthExceeded(usize),
}

impl Error {
    /// Check if this error came from malformed input JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this error names an unregistered node or mark type.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Error::UnknownNode(_) | Error::UnknownMark(_))
    }

    /// The offending type name for unknown node/mark errors.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Error::UnknownNode(name) | Error::UnknownMark(name) => Some(name),
            _ => None,
        }
    }
}
