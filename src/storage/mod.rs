//! Storage layer for filecrypt
//!
//! Whole-file reads and atomic whole-file writes.

pub mod file_io;

pub use file_io::{read_bytes, write_bytes_atomic};
