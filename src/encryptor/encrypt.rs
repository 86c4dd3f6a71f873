//! src/encryptor/encrypt.rs
//! Per-entry encryption: key from the session, fresh IV, AES-256-GCM

use crate::aliases::PasswordBytes;
use crate::container::EncryptedEntry;
use crate::crypto::aead::seal;
use crate::encryptor::session::{EncryptionSession, SaltPolicy};
use crate::error::ArchcryptError;

/// Encrypt one entry's bytes under the session's key schedule.
pub fn encrypt_entry(
    path: &str,
    plaintext: &[u8],
    session: &EncryptionSession<'_>,
) -> Result<EncryptedEntry, ArchcryptError> {
    session.with_entry_key(|salt, key| {
        let (iv, ciphertext) = seal(plaintext, key)?;
        Ok(EncryptedEntry {
            path: path.to_owned(),
            salt: salt.clone(),
            iv,
            ciphertext,
        })
    })
}

/// One-shot: encrypt `plaintext` into a standalone container blob.
///
/// Uses a fresh salt; equivalent to a single-entry transcode.
pub fn encrypt_blob(
    plaintext: &[u8],
    password: &PasswordBytes,
    iterations: u32,
) -> Result<Vec<u8>, ArchcryptError> {
    let session = EncryptionSession::new(password, iterations, SaltPolicy::PerEntry)?;
    encrypt_entry("", plaintext, &session).map(|entry| entry.to_blob())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::password_from_str;
    use crate::consts::{CONTAINER_HEADER_LEN, PBKDF2_MIN_ITER, TAG_LEN};

    #[test]
    fn entry_carries_path_and_tagged_ciphertext() {
        let password = password_from_str("secret");
        let session =
            EncryptionSession::new(&password, PBKDF2_MIN_ITER, SaltPolicy::PerSession).unwrap();

        let entry = encrypt_entry("dir/b.txt", b"world", &session).unwrap();
        assert_eq!(entry.path, "dir/b.txt");
        assert_eq!(entry.ciphertext.len(), 5 + TAG_LEN);
        assert_ne!(&entry.ciphertext[..5], b"world");
    }

    #[test]
    fn blob_has_header_and_tag() {
        let password = password_from_str("secret");
        let blob = encrypt_blob(b"abc", &password, PBKDF2_MIN_ITER).unwrap();
        assert_eq!(blob.len(), CONTAINER_HEADER_LEN + 3 + TAG_LEN);
    }
}
