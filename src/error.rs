//! Custom error types for filecrypt
//!
//! Every failure is a distinct variant so callers can tell a malformed
//! container from a failed authentication or a filesystem problem.

use thiserror::Error;

/// The main error type for filecrypt operations
#[derive(Error, Debug)]
pub enum FilecryptError {
    /// Input is too short to hold the fixed container header
    #[error("Malformed container: {len} bytes is shorter than the 44-byte header")]
    MalformedContainer { len: usize },

    /// Tag verification failed (wrong password, or the data was altered)
    #[error("Decryption failed: wrong password or corrupted file")]
    AuthenticationFailure,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The secure random source could not produce bytes
    #[error("Entropy error: {0}")]
    EntropyFailure(String),

    /// The cipher refused to encrypt the input
    #[error("Encryption error: {0}")]
    EncryptionFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Reading a password from the terminal failed
    #[error("Password error: {0}")]
    Password(String),
}

impl FilecryptError {
    /// Check if this is an authentication failure
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }

    /// Check if this is a malformed container error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedContainer { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for FilecryptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FilecryptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for filecrypt operations
pub type FilecryptResult<T> = Result<T, FilecryptError>;
