//! File encryption service
//!
//! Bridges the crypto core with the filesystem: reads a whole input file,
//! encrypts or decrypts it, and writes the result atomically. Default
//! output names come from [`Settings`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::crypto::{self, SecureString};
use crate::error::{FilecryptError, FilecryptResult};
use crate::storage::{read_bytes, write_bytes_atomic};

/// Service for encrypting and decrypting files on disk
pub struct FileCryptService<'a> {
    settings: &'a Settings,
}

impl<'a> FileCryptService<'a> {
    /// Create a new file crypt service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Output path used for `encrypt` when none is given: `<input><suffix>`
    pub fn default_encrypted_path(&self, input: &Path) -> PathBuf {
        append_to_file_name(input, &self.settings.encrypted_suffix)
    }

    /// Output path used for `decrypt` when none is given
    ///
    /// Strips the encrypted suffix when present, otherwise appends the
    /// decrypted suffix.
    pub fn default_decrypted_path(&self, input: &Path) -> PathBuf {
        let suffix = self.settings.encrypted_suffix.as_str();

        let stripped = input
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(suffix))
            .filter(|stem| !stem.is_empty());

        match stripped {
            Some(stem) => input.with_file_name(stem),
            None => append_to_file_name(input, &self.settings.decrypted_suffix),
        }
    }

    /// Encrypt `input` and write the container to `output` (or the default)
    ///
    /// Returns the path written.
    pub fn encrypt_file(
        &self,
        input: &Path,
        password: &SecureString,
        output: Option<&Path>,
    ) -> FilecryptResult<PathBuf> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_encrypted_path(input));
        check_paths(input, &output, password)?;

        let plaintext = read_bytes(input)?;
        let container = crypto::encrypt(&plaintext, password.as_bytes())?;
        write_bytes_atomic(&output, &container.to_bytes())?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            len = container.encoded_len(),
            "encrypted file"
        );
        Ok(output)
    }

    /// Decrypt `input` and write the plaintext to `output` (or the default)
    ///
    /// Nothing is written unless authentication succeeds.
    pub fn decrypt_file(
        &self,
        input: &Path,
        password: &SecureString,
        output: Option<&Path>,
    ) -> FilecryptResult<PathBuf> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_decrypted_path(input));
        check_paths(input, &output, password)?;

        let container = read_bytes(input)?;
        let plaintext = crypto::decrypt(&container, password.as_bytes()).map_err(|e| {
            warn!(input = %input.display(), error = %e, "decryption rejected");
            e
        })?;
        write_bytes_atomic(&output, &plaintext)?;

        debug!(
            input = %input.display(),
            output = %output.display(),
            len = plaintext.len(),
            "decrypted file"
        );
        Ok(output)
    }
}

fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

fn check_paths(input: &Path, output: &Path, password: &SecureString) -> FilecryptResult<()> {
    if password.is_empty() {
        return Err(FilecryptError::Password("password must not be empty".into()));
    }

    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        return Err(FilecryptError::Io(format!(
            "Refusing to overwrite input file {}",
            input.display()
        )));
    }

    Ok(())
}
