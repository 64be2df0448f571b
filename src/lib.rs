//! filecrypt - password-based authenticated file encryption
//!
//! Encrypts a buffer or file under a password and produces a
//! self-contained container:
//!
//! ```text
//! salt (16) || nonce (12) || tag (16) || ciphertext
//! ```
//!
//! The key is derived with PBKDF2-HMAC-SHA256 (200,000 iterations) and the
//! data is sealed with AES-256-GCM. Decryption verifies the tag before any
//! plaintext is released.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, container format, encrypt/decrypt
//! - `storage`: whole-file reads and atomic writes
//! - `services`: file-level encrypt/decrypt with default output naming
//! - `config`: config paths and user settings
//! - `cli`: command handlers for the `filecrypt` binary
//! - `telemetry`: logging setup
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! let container = filecrypt::encrypt(b"hello world", b"correct horse")?;
//! let bytes = container.to_bytes();
//! assert_eq!(bytes.len(), 55);
//!
//! let plaintext = filecrypt::decrypt(&bytes, b"correct horse")?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok::<(), filecrypt::FilecryptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use crypto::{decrypt, encrypt, encrypt_with_rng, Container, SecureRandom};
pub use error::{FilecryptError, FilecryptResult};
