//! src/builders/pbkdf2_builder.rs
//! PBKDF2-HMAC-SHA256 builder

use crate::aliases::{Aes256Key32, PasswordBytes, Salt16};
use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::crypto::kdf::pbkdf2::derive_secure_pbkdf2_key;
use crate::crypto::rng::SecureRandomExt;
use crate::error::ArchcryptError;

/// PBKDF2-HMAC-SHA256 key derivation builder
///
/// Strong defaults: 16-byte random salt + [`DEFAULT_PBKDF2_ITERATIONS`] iterations.
///
/// # Thread Safety
///
/// This type is `Send + Sync`. All operations are pure (no shared mutable state).
#[derive(Debug, Clone)]
pub struct Pbkdf2Builder {
    iterations: u32,
    salt: Salt16,
}

impl Pbkdf2Builder {
    /// Create builder with a fresh random salt and the default iteration count
    pub fn new() -> Result<Self, ArchcryptError> {
        Ok(Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            salt: Salt16::random()?,
        })
    }

    /// Set custom iteration count, clamped to `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.clamp(PBKDF2_MIN_ITER, PBKDF2_MAX_ITER);
        self
    }

    /// Set custom salt
    #[must_use]
    pub fn with_salt(mut self, salt: [u8; 16]) -> Self {
        self.salt = Salt16::new(salt);
        self
    }

    /// Current salt as raw 16-byte array (for serialization)
    #[must_use]
    pub fn salt(&self) -> &[u8; 16] {
        self.salt.expose_secret()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive key directly into caller-provided secure buffer (preferred)
    #[inline]
    pub fn derive_secure(
        &self,
        password: &PasswordBytes,
        out_key: &mut Aes256Key32,
    ) -> Result<(), ArchcryptError> {
        derive_secure_pbkdf2_key(password, self.salt.expose_secret(), self.iterations, out_key)
    }

    /// Convenience: derive and return a fresh secure key
    #[inline]
    pub fn derive_secure_new(&self, password: &PasswordBytes) -> Result<Aes256Key32, ArchcryptError> {
        let mut key = Aes256Key32::new([0u8; 32]);
        self.derive_secure(password, &mut key)?;
        Ok(key)
    }
}
