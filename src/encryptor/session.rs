//! src/encryptor/session.rs
//! Key schedule for one encryption run
//!
//! A session owns the only copy of the derived key(s) for a transcode. With
//! [`SaltPolicy::PerEntry`] every entry gets a fresh salt and its own PBKDF2 run;
//! with [`SaltPolicy::PerSession`] one salt is drawn and one key derived up front,
//! and only the IV changes from entry to entry.

use crate::aliases::{Aes256Key32, PasswordBytes, Salt16};
use crate::crypto::kdf::pbkdf2::{derive_secure_pbkdf2_key, validate_pbkdf2_params};
use crate::crypto::rng::SecureRandomExt;
use crate::error::ArchcryptError;

/// How salts (and therefore derived keys) are shared across entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaltPolicy {
    /// Fresh salt and key derivation for every entry.
    #[default]
    PerEntry,
    /// One salt and one derivation for the whole transcode; IVs stay unique per entry.
    PerSession,
}

/// Derived key material for one transcode.
///
/// `Sync`: the batch path shares one session across worker threads.
pub struct EncryptionSession<'a> {
    password: &'a PasswordBytes,
    iterations: u32,
    shared: Option<(Salt16, Aes256Key32)>,
}

impl<'a> EncryptionSession<'a> {
    /// Validate the KDF inputs and, for [`SaltPolicy::PerSession`], derive the shared key.
    ///
    /// # Errors
    ///
    /// [`ArchcryptError::Derivation`] for an empty password or a bad iteration count.
    pub fn new(
        password: &'a PasswordBytes,
        iterations: u32,
        policy: SaltPolicy,
    ) -> Result<Self, ArchcryptError> {
        validate_pbkdf2_params(password, iterations)?;

        let shared = match policy {
            SaltPolicy::PerEntry => None,
            SaltPolicy::PerSession => {
                let salt = Salt16::random()?;
                let mut key = Aes256Key32::new([0u8; 32]);
                derive_secure_pbkdf2_key(password, salt.expose_secret(), iterations, &mut key)?;
                Some((salt, key))
            }
        };

        Ok(Self {
            password,
            iterations,
            shared,
        })
    }

    #[must_use]
    pub fn policy(&self) -> SaltPolicy {
        if self.shared.is_some() {
            SaltPolicy::PerSession
        } else {
            SaltPolicy::PerEntry
        }
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run `f` with the salt and key to use for the next entry.
    pub fn with_entry_key<T>(
        &self,
        f: impl FnOnce(&Salt16, &Aes256Key32) -> Result<T, ArchcryptError>,
    ) -> Result<T, ArchcryptError> {
        match &self.shared {
            Some((salt, key)) => f(salt, key),
            None => {
                let salt = Salt16::random()?;
                let mut key = Aes256Key32::new([0u8; 32]);
                derive_secure_pbkdf2_key(
                    self.password,
                    salt.expose_secret(),
                    self.iterations,
                    &mut key,
                )?;
                f(&salt, &key)
            }
        }
    }
}

impl std::fmt::Debug for EncryptionSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionSession")
            .field("iterations", &self.iterations)
            .field("policy", &self.policy())
            .finish_non_exhaustive()
    }
}
