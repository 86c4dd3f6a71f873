// src/crypto/rng.rs
//! Secure randomness for fixed-size values (salts, nonces)
//!
//! Adds `T::random()` to every `SpanBuffer<N>` alias (`Salt16`, `Iv12`, …)
//! using a thread-local `OsRng`.

use crate::error::ArchcryptError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, ArchcryptError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, ArchcryptError> {
        RNG.with(|rng_cell| {
            let mut bytes = [0u8; N];
            rng_cell
                .borrow_mut()
                .try_fill_bytes(&mut bytes)
                .map_err(|e| ArchcryptError::Crypto(format!("OS random source failed: {e}")))?;
            Ok(Fixed::new(bytes))
        })
    }
}
