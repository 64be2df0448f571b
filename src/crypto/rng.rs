//! Random byte sources
//!
//! Salt and nonce generation goes through [`SecureRandom`] so callers can
//! inject the source. Production code uses [`OsRandom`]; tests can use
//! [`FixedRandom`] to get reproducible containers.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{FilecryptError, FilecryptResult};

/// A source of random bytes for salts and nonces
pub trait SecureRandom {
    /// Fill `dest` completely or fail
    ///
    /// # Errors
    ///
    /// Returns [`FilecryptError::EntropyFailure`] when the source cannot
    /// supply bytes. Callers must not retry silently.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> FilecryptResult<()>;
}

/// Operating-system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> FilecryptResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| FilecryptError::EntropyFailure(format!("OS random source failed: {}", e)))
    }
}

/// Replays a fixed byte sequence
///
/// Not random at all. Only for reproducible tests and golden files; it
/// fails with [`FilecryptError::EntropyFailure`] once the bytes run out.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedRandom {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl SecureRandom for FixedRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> FilecryptResult<()> {
        if dest.len() > self.remaining() {
            return Err(FilecryptError::EntropyFailure(format!(
                "fixed source exhausted: need {}, have {}",
                dest.len(),
                self.remaining()
            )));
        }

        let end = self.pos + dest.len();
        dest.copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.fill_bytes(&mut a).unwrap();
        OsRandom.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_random_replays_in_order() {
        let mut rng = FixedRandom::new(vec![1, 2, 3, 4, 5]);
        let mut first = [0u8; 2];
        let mut second = [0u8; 3];
        rng.fill_bytes(&mut first).unwrap();
        rng.fill_bytes(&mut second).unwrap();
        assert_eq!(first, [1, 2]);
        assert_eq!(second, [3, 4, 5]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_fixed_random_exhaustion() {
        let mut rng = FixedRandom::new(vec![0u8; 4]);
        let mut dest = [0u8; 5];
        let err = rng.fill_bytes(&mut dest).unwrap_err();
        assert!(matches!(err, FilecryptError::EntropyFailure(_)));
        // Nothing consumed on failure
        assert_eq!(rng.remaining(), 4);
    }
}
