//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Turns a password and a 16-byte salt into a 32-byte AES-256 key. The
//! iteration count is part of the file format: changing it makes every
//! existing container undecryptable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::container::{KEY_LEN, SALT_LEN};

/// PBKDF2 iteration count shared by encryption and decryption
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// A derived encryption key, zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same inputs always give the same key.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = DerivedKey { key: [0u8; KEY_LEN] };
    pbkdf2_sha256(password, salt, PBKDF2_ITERATIONS, &mut key.key);
    key
}

pub(crate) fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha256>(password, salt, iterations, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published PBKDF2-HMAC-SHA256 vectors for P="password", S="salt", dkLen=32
    #[test]
    fn test_pbkdf2_vector_one_iteration() {
        let mut out = [0u8; 32];
        pbkdf2_sha256(b"password", b"salt", 1, &mut out);
        assert_eq!(
            hex::encode(out),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_pbkdf2_vector_4096_iterations() {
        let mut out = [0u8; 32];
        pbkdf2_sha256(b"password", b"salt", 4096, &mut out);
        assert_eq!(
            hex::encode(out),
            "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a"
        );
    }

    #[test]
    fn test_derive_key_matches_fixed_iterations() {
        let salt = [7u8; SALT_LEN];
        let key = derive_key(b"correct horse", &salt);

        let mut expected = [0u8; KEY_LEN];
        pbkdf2_sha256(b"correct horse", &salt, PBKDF2_ITERATIONS, &mut expected);
        assert_eq!(key.as_bytes(), &expected);
    }

    #[test]
    fn test_same_password_same_key() {
        let salt = [1u8; SALT_LEN];
        let key1 = derive_key(b"test_password", &salt);
        let key2 = derive_key(b"test_password", &salt);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [1u8; SALT_LEN];
        let key1 = derive_key(b"password1", &salt);
        let key2 = derive_key(b"password2", &salt);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key(b"same_password", &[1u8; SALT_LEN]);
        let key2 = derive_key(b"same_password", &[2u8; SALT_LEN]);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = derive_key(b"secret", &[0u8; SALT_LEN]);
        assert_eq!(format!("{:?}", key), "DerivedKey([REDACTED])");
    }
}
