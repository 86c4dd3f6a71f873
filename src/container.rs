//! # Encrypted Container Format
//!
//! Byte layout of one encrypted archive entry. The blob replaces the original
//! entry bytes at the same path inside the output archive, so a decrypting party
//! needs nothing but the password (and the iteration count) to recover the plaintext.
//!
//! ## Layout
//!
//! ```text
//! +-----------+---------+-----------------------------------+
//! | salt (16) | iv (12) | ciphertext (n) || GCM tag (16)     |
//! +-----------+---------+-----------------------------------+
//! ```
//!
//! The smallest well-formed blob (empty plaintext) is 44 bytes. [`decode`] only
//! requires the 28-byte header; a shorter ciphertext is left for the AEAD to reject.

use crate::aliases::{Iv12, Salt16};
use crate::consts::{CONTAINER_HEADER_LEN, IV_LEN, SALT_LEN};
use crate::error::ArchcryptError;

/// One encrypted archive entry, ready to be written into the output container.
#[derive(Debug, Clone)]
pub struct EncryptedEntry {
    /// Archive-relative, forward-slash separated path (after rewrite).
    pub path: String,
    pub salt: Salt16,
    pub iv: Iv12,
    /// Ciphertext with the 16-byte authentication tag appended.
    pub ciphertext: Vec<u8>,
}

impl EncryptedEntry {
    /// Serialize into the container layout.
    #[must_use]
    pub fn to_blob(&self) -> Vec<u8> {
        encode(&self.salt, &self.iv, &self.ciphertext)
    }

    /// Parse a blob read back from an archive at `path`.
    pub fn from_blob(path: impl Into<String>, blob: &[u8]) -> Result<Self, ArchcryptError> {
        let (salt, iv, ciphertext) = decode(blob)?;
        Ok(Self {
            path: path.into(),
            salt,
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Total size of the serialized blob.
    #[must_use]
    pub fn blob_len(&self) -> usize {
        CONTAINER_HEADER_LEN + self.ciphertext.len()
    }
}

/// Write `salt || iv || ciphertext`.
#[must_use]
pub fn encode(salt: &Salt16, iv: &Iv12, ciphertext: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(CONTAINER_HEADER_LEN + ciphertext.len());
    blob.extend_from_slice(salt.expose_secret());
    blob.extend_from_slice(iv.expose_secret());
    blob.extend_from_slice(ciphertext);
    blob
}

/// Split a blob into `(salt, iv, ciphertext)`.
///
/// # Errors
///
/// [`ArchcryptError::Format`] if the blob is shorter than the 28-byte header.
pub fn decode(blob: &[u8]) -> Result<(Salt16, Iv12, &[u8]), ArchcryptError> {
    if blob.len() < CONTAINER_HEADER_LEN {
        return Err(ArchcryptError::Format(format!(
            "blob is {} bytes, need at least {CONTAINER_HEADER_LEN} (salt + iv)",
            blob.len()
        )));
    }

    let (salt_bytes, rest) = blob.split_at(SALT_LEN);
    let (iv_bytes, ciphertext) = rest.split_at(IV_LEN);

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(salt_bytes);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    Ok((Salt16::new(salt), Iv12::new(iv), ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_salt_then_iv_then_ciphertext() {
        let salt = Salt16::new([0x11; 16]);
        let iv = Iv12::new([0x22; 12]);
        let blob = encode(&salt, &iv, &[0xAA, 0xBB]);

        assert_eq!(
            hex::encode(&blob),
            "11111111111111111111111111111111222222222222222222222222aabb"
        );
    }

    #[test]
    fn decode_exact_header_yields_empty_ciphertext() {
        let blob = [7u8; CONTAINER_HEADER_LEN];
        let (salt, iv, ct) = decode(&blob).unwrap();
        assert_eq!(salt.expose_secret(), &[7u8; 16]);
        assert_eq!(iv.expose_secret(), &[7u8; 12]);
        assert!(ct.is_empty());
    }

    #[test]
    fn decode_rejects_short_blob() {
        let err = decode(&[0u8; 27]).unwrap_err();
        assert!(matches!(err, ArchcryptError::Format(_)));
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn entry_blob_roundtrip_keeps_fields() {
        let entry = EncryptedEntry {
            path: "dir/b.txt".into(),
            salt: Salt16::new([1; 16]),
            iv: Iv12::new([2; 12]),
            ciphertext: vec![3; 20],
        };
        let blob = entry.to_blob();
        assert_eq!(blob.len(), entry.blob_len());

        let parsed = EncryptedEntry::from_blob("dir/b.txt", &blob).unwrap();
        assert_eq!(parsed.path, "dir/b.txt");
        assert_eq!(parsed.salt.expose_secret(), entry.salt.expose_secret());
        assert_eq!(parsed.iv.expose_secret(), entry.iv.expose_secret());
        assert_eq!(parsed.ciphertext, entry.ciphertext);
    }
}
