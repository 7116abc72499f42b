//! Error types for recipegraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! Lookups that find nothing are not errors; they return `Option`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recipegraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Comprehensive error type for catalog loading, graph and session operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A catalog or config file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed catalog or config document.
    #[error("Format error: {message}")]
    Format {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Icon position string is not of the form `"Npx Mpx"`.
    #[error("Invalid position '{position}' for icon {icon_id}")]
    InvalidIconPosition {
        /// Icon identifier
        icon_id: String,
        /// The offending position string
        position: String,
    },

    /// Session document could not be parsed or written.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// Invalid operation (e.g., adding a custom recipe with a taken id)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },
}

impl GraphError {
    /// Create a format error from a message and optional source.
    pub fn format<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Format {
            message: message.into(),
            source: source.map(|e| Box::new(e) as BoxedSource),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as BoxedSource),
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
