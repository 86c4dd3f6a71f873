//! src/decryptor/session.rs
//! Key cache for decrypting many blobs with one password
//!
//! Archives written with [`SaltPolicy::PerSession`](crate::SaltPolicy) carry the
//! same salt in every entry; the cache turns N derivations into one.

use crate::aliases::{Aes256Key32, PasswordBytes};
use crate::crypto::kdf::pbkdf2::{derive_secure_pbkdf2_key, validate_pbkdf2_params};
use crate::error::ArchcryptError;
use std::collections::HashMap;

pub struct DecryptionSession<'a> {
    password: &'a PasswordBytes,
    iterations: u32,
    keys: HashMap<[u8; 16], Aes256Key32>,
}

impl<'a> DecryptionSession<'a> {
    /// # Errors
    ///
    /// [`ArchcryptError::Derivation`] for an empty password or a bad iteration count.
    pub fn new(password: &'a PasswordBytes, iterations: u32) -> Result<Self, ArchcryptError> {
        validate_pbkdf2_params(password, iterations)?;
        Ok(Self {
            password,
            iterations,
            keys: HashMap::new(),
        })
    }

    /// Key for `salt`, derived on first use.
    pub fn key_for(&mut self, salt: &[u8; 16]) -> Result<&Aes256Key32, ArchcryptError> {
        if !self.keys.contains_key(salt) {
            let mut key = Aes256Key32::new([0u8; 32]);
            derive_secure_pbkdf2_key(self.password, salt, self.iterations, &mut key)?;
            self.keys.insert(*salt, key);
        }
        self.keys
            .get(salt)
            .ok_or_else(|| ArchcryptError::Derivation("derived key missing from cache".into()))
    }

    /// Number of distinct salts seen so far.
    #[must_use]
    pub fn derived_keys(&self) -> usize {
        self.keys.len()
    }
}

impl std::fmt::Debug for DecryptionSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptionSession")
            .field("iterations", &self.iterations)
            .field("derived_keys", &self.keys.len())
            .finish_non_exhaustive()
    }
}
