//! Service layer for filecrypt
//!
//! File-level operations built on the crypto core and storage layer.

pub mod file_crypt;

pub use file_crypt::FileCryptService;
