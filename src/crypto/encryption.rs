//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption of whole buffers under a password.
//! Each encryption draws a fresh salt and nonce, so the same plaintext and
//! password never produce the same container twice.

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes256Gcm, Key, Nonce, Tag,
};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{FilecryptError, FilecryptResult};

use super::container::{Container, NONCE_LEN, SALT_LEN, TAG_LEN};
use super::key_derivation::{derive_key, DerivedKey};
use super::rng::{OsRandom, SecureRandom};

/// No associated data is authenticated alongside the ciphertext
const ASSOCIATED_DATA: &[u8] = b"";

fn cipher_for(key: &DerivedKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}

/// Encrypt plaintext under a password using the OS random source
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> FilecryptResult<Container> {
    encrypt_with_rng(plaintext, password, &mut OsRandom)
}

/// Encrypt plaintext under a password, drawing salt and nonce from `rng`
///
/// The salt is read first, then the nonce.
///
/// # Errors
///
/// Returns [`FilecryptError::EntropyFailure`] if `rng` cannot supply bytes.
pub fn encrypt_with_rng<R>(
    plaintext: &[u8],
    password: &[u8],
    rng: &mut R,
) -> FilecryptResult<Container>
where
    R: SecureRandom + ?Sized,
{
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce)?;

    let key = derive_key(password, &salt);
    let cipher = cipher_for(&key);

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), ASSOCIATED_DATA, &mut buffer)
        .map_err(|e| FilecryptError::EncryptionFailure(format!("Encryption failed: {}", e)))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());

    debug!(plaintext_len = plaintext.len(), "encrypted buffer");
    Ok(Container::new(salt, nonce, tag_bytes, buffer))
}

/// Decrypt a serialized container with a password
///
/// # Errors
///
/// - [`FilecryptError::MalformedContainer`] if `container` is shorter than
///   the header. No key derivation is attempted.
/// - [`FilecryptError::AuthenticationFailure`] if the tag does not verify.
///   No plaintext is returned in that case.
pub fn decrypt(container: &[u8], password: &[u8]) -> FilecryptResult<Vec<u8>> {
    let container = Container::from_bytes(container)?;
    decrypt_container(container, password)
}

/// Decrypt an already parsed container with a password
pub fn decrypt_container(container: Container, password: &[u8]) -> FilecryptResult<Vec<u8>> {
    let (salt, nonce, tag, mut buffer) = container.into_parts();

    let key = derive_key(password, &salt);
    let cipher = cipher_for(&key);

    // The tag is checked before any keystream is applied
    let verified = cipher.decrypt_in_place_detached(
        Nonce::from_slice(&nonce),
        ASSOCIATED_DATA,
        &mut buffer,
        Tag::from_slice(&tag),
    );
    if verified.is_err() {
        buffer.zeroize();
        return Err(FilecryptError::AuthenticationFailure);
    }

    debug!(plaintext_len = buffer.len(), "decrypted buffer");
    Ok(buffer)
}
