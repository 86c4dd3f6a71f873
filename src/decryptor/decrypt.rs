//! src/decryptor/decrypt.rs
//! Container blob → plaintext

use crate::aliases::PasswordBytes;
use crate::container::decode;
use crate::crypto::aead::open;
use crate::decryptor::session::DecryptionSession;
use crate::error::ArchcryptError;

/// Decrypt one container blob using (and filling) the session key cache.
///
/// # Errors
///
/// - [`ArchcryptError::Format`] - blob shorter than the 28-byte header
/// - [`ArchcryptError::Authentication`] - wrong password, wrong iteration count, or tampering
pub fn decrypt_with_session(
    blob: &[u8],
    session: &mut DecryptionSession<'_>,
) -> Result<Vec<u8>, ArchcryptError> {
    let (salt, iv, ciphertext) = decode(blob)?;
    let key = session.key_for(salt.expose_secret())?;
    open(ciphertext, key, &iv)
}

/// One-shot: decrypt a standalone container blob.
pub fn decrypt_entry(
    blob: &[u8],
    password: &PasswordBytes,
    iterations: u32,
) -> Result<Vec<u8>, ArchcryptError> {
    let mut session = DecryptionSession::new(password, iterations)?;
    decrypt_with_session(blob, &mut session)
}
