//! File I/O utilities with atomic writes
//!
//! Inputs are read whole; outputs are written to a temp file in the same
//! directory and renamed into place, so a failure never leaves a partial
//! output file behind.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FilecryptError;

/// Read an entire file into memory
///
/// The handle is closed when this returns, on success or failure.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FilecryptError> {
    let path = path.as_ref();

    let mut file = File::open(path)
        .map_err(|e| FilecryptError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| FilecryptError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), len = data.len(), "read file");
    Ok(data)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The temp file gets a fresh unique name in the destination directory and
/// is created exclusively, so no existing file is ever truncated. The
/// destination is either completely written or not modified at all.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), FilecryptError> {
    let path = path.as_ref();

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| {
        FilecryptError::Io(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    // Dropped (and removed) on any early return
    let mut temp = NamedTempFile::new_in(parent)
        .map_err(|e| FilecryptError::Io(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(data)
        .map_err(|e| FilecryptError::Io(format!("Failed to write data: {}", e)))?;

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| FilecryptError::Io(format!("Failed to sync data: {}", e)))?;

    temp.persist(path).map_err(|e| {
        FilecryptError::Io(format!(
            "Failed to rename temp file to {}: {}",
            path.display(),
            e.error
        ))
    })?;

    debug!(path = %path.display(), len = data.len(), "wrote file");
    Ok(())
}
