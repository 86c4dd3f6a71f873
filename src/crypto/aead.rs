//! src/crypto/aead.rs
//! AES-256-GCM entry cipher
//!
//! One call seals one entry: a fresh 96-bit nonce from the OS CSPRNG, and the
//! 128-bit tag appended to the returned ciphertext.

use crate::aliases::{Aes256Key32, Iv12};
use crate::consts::TAG_LEN;
use crate::crypto::rng::SecureRandomExt;
use crate::error::ArchcryptError;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

#[inline]
fn cipher_for(key: &Aes256Key32) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()))
}

/// Encrypt `plaintext` under `key` with a freshly generated IV.
///
/// Returns the IV and `ciphertext || tag`.
pub fn seal(plaintext: &[u8], key: &Aes256Key32) -> Result<(Iv12, Vec<u8>), ArchcryptError> {
    let iv = Iv12::random()?;
    let ciphertext = seal_with_iv(plaintext, key, &iv)?;
    Ok((iv, ciphertext))
}

/// Encrypt with a caller-chosen IV. Only for deterministic tests and benches.
///
/// Never call this twice with the same `(key, iv)` pair.
pub fn seal_with_iv(
    plaintext: &[u8],
    key: &Aes256Key32,
    iv: &Iv12,
) -> Result<Vec<u8>, ArchcryptError> {
    cipher_for(key)
        .encrypt(Nonce::from_slice(iv.expose_secret()), plaintext)
        .map_err(|_| ArchcryptError::Crypto("AES-GCM encryption failed".into()))
}

/// Decrypt and verify `ciphertext || tag`.
///
/// # Errors
///
/// [`ArchcryptError::Authentication`] when the tag does not verify or the input is
/// shorter than a tag. No partial plaintext is ever returned.
pub fn open(ciphertext: &[u8], key: &Aes256Key32, iv: &Iv12) -> Result<Vec<u8>, ArchcryptError> {
    if ciphertext.len() < TAG_LEN {
        return Err(ArchcryptError::Authentication);
    }
    cipher_for(key)
        .decrypt(Nonce::from_slice(iv.expose_secret()), ciphertext)
        .map_err(|_| ArchcryptError::Authentication)
}
