//! Error types for the Docfinder plugin.
//!
//! This module defines the centralized error type [`DocfinderError`] and a type alias
//! [`Result`] used throughout the plugin. Errors that reach the UI are turned into
//! notifications by the application layer; nothing here is ever shown raw.

use thiserror::Error;

/// The main error type for Docfinder operations.
///
/// Most variants carry a human-readable description. I/O and JSON decoding
/// errors convert automatically via `#[from]` so storage and API code can use `?`.
#[derive(Debug, Error)]
pub enum DocfinderError {
    /// Reading or writing the persisted session failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend could not be reached or answered with a non-success status.
    ///
    /// Covers transport-level failures reported by the host (DNS, refused
    /// connections, timeouts) as well as HTTP error statuses.
    #[error("Request failed: {0}")]
    Api(String),

    /// A response or stored document was not valid JSON for the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Docfinder operations.
pub type Result<T> = std::result::Result<T, DocfinderError>;
