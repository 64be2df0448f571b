//! Container format
//!
//! The encrypted artifact is four contiguous fields:
//!
//! ```text
//! offset 0..16   salt
//! offset 16..28  nonce
//! offset 28..44  tag
//! offset 44..end ciphertext (same length as the plaintext)
//! ```
//!
//! There is no magic number or version byte. All field widths live here so
//! the encrypt and decrypt paths cannot drift apart.

use crate::error::{FilecryptError, FilecryptResult};

/// Size of the key-derivation salt in bytes
pub const SALT_LEN: usize = 16;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_LEN: usize = 16;

/// Size of the AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Fixed header size; anything shorter is malformed
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

const NONCE_OFFSET: usize = SALT_LEN;
const TAG_OFFSET: usize = NONCE_OFFSET + NONCE_LEN;

/// A parsed or freshly produced encrypted container
#[derive(Clone, PartialEq, Eq)]
pub struct Container {
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl Container {
    pub(crate) fn new(
        salt: [u8; SALT_LEN],
        nonce: [u8; NONCE_LEN],
        tag: [u8; TAG_LEN],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            nonce,
            tag,
            ciphertext,
        }
    }

    /// Split raw bytes into fields by fixed offsets
    ///
    /// # Errors
    ///
    /// Returns [`FilecryptError::MalformedContainer`] when `bytes` is shorter
    /// than [`HEADER_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> FilecryptResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(FilecryptError::MalformedContainer { len: bytes.len() });
        }

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        let mut tag = [0u8; TAG_LEN];
        salt.copy_from_slice(&bytes[..NONCE_OFFSET]);
        nonce.copy_from_slice(&bytes[NONCE_OFFSET..TAG_OFFSET]);
        tag.copy_from_slice(&bytes[TAG_OFFSET..HEADER_LEN]);

        Ok(Self::new(salt, nonce, tag, bytes[HEADER_LEN..].to_vec()))
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total serialized size: header plus ciphertext
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }

    /// Serialize as `salt || nonce || tag || ciphertext`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub(crate) fn into_parts(self) -> ([u8; SALT_LEN], [u8; NONCE_LEN], [u8; TAG_LEN], Vec<u8>) {
        (self.salt, self.nonce, self.tag, self.ciphertext)
    }
}

// Ciphertext can be large; only show sizes
impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("ciphertext_len", &self.ciphertext.len())
            .finish_non_exhaustive()
    }
}
