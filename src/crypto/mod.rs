//! Cryptographic core for filecrypt
//!
//! AES-256-GCM authenticated encryption with PBKDF2-HMAC-SHA256 key
//! derivation, over a fixed `salt || nonce || tag || ciphertext` container.

pub mod container;
pub mod encryption;
pub mod key_derivation;
pub mod rng;
pub mod secure_memory;

pub use container::{Container, HEADER_LEN, KEY_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};
pub use encryption::{decrypt, decrypt_container, encrypt, encrypt_with_rng};
pub use key_derivation::{derive_key, DerivedKey, PBKDF2_ITERATIONS};
pub use rng::{FixedRandom, OsRandom, SecureRandom};
pub use secure_memory::SecureString;
