//! Centralized error types for imaplens.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the imaplens library.
#[derive(Error, Debug)]
pub enum LensError {
    /// The message is no longer present in the open folder
    /// (expunged, or the session was closed underneath us).
    #[error("Message {seq} is no longer present in the folder")]
    StaleHandle { seq: u32 },

    /// The message content violates basic structure (e.g. empty `From:` list).
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// The simple body accessor was used on multipart content.
    #[error("Body not available as plain content (content type '{0}'); use a MIME parser on the raw message")]
    UnsupportedContent(String),

    /// The server returned a message without a UID attribute.
    #[error("Server returned no UID for message {seq}")]
    MissingUid { seq: u32 },

    /// Opaque passthrough from the underlying IMAP library.
    #[error("IMAP transport failure: {0}")]
    Transport(#[from] imap::Error),

    /// TLS setup or handshake failure.
    #[error("TLS failure: {0}")]
    Tls(#[from] native_tls::Error),

    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// The configuration file could not be parsed.
    #[error("Invalid configuration in '{path}': {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

/// Convenience alias for `Result<T, LensError>`.
pub type Result<T> = std::result::Result<T, LensError>;

impl LensError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
