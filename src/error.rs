//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, ArchcryptError>`](ArchcryptError).
//!
//! Errors fall into two groups:
//! - **structural**: the input archive cannot be opened, the output archive cannot
//!   be assembled, or no key can be derived. These abort the whole operation.
//! - **per-entry**: one entry cannot be read, sealed or opened. Inside a transcode
//!   these are collected into [`TranscodeProgress::failures`](crate::TranscodeProgress)
//!   and the loop moves on.

use thiserror::Error;

/// The error type for all archive encryption operations.
#[derive(Error, Debug)]
pub enum ArchcryptError {
    /// Invalid input to the key derivation function.
    ///
    /// Raised for an empty password, a salt that is not exactly 16 bytes,
    /// or an iteration count outside the allowed range.
    #[error("Derivation error: {0}")]
    Derivation(String),

    /// The authentication tag did not verify.
    ///
    /// Either the ciphertext (or tag) was modified, or the key was derived
    /// from the wrong password. No plaintext is returned in this case.
    #[error("Authentication failed: wrong password or tampered ciphertext")]
    Authentication,

    /// The archive codec failed to open, read or write an archive.
    #[error("Codec error: {0}")]
    Codec(String),

    /// A blob does not follow the `salt || iv || ciphertext` layout.
    #[error("Format error: {0}")]
    Format(String),

    /// The secure random source or the AEAD encryption failed.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Two output entries ended up with the same path.
    #[error("Duplicate entry path: {0}")]
    DuplicatePath(String),

    /// The archive file name has no supported extension.
    #[error("Unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// The caller cancelled the transcode between two entries.
    #[error("Transcode cancelled")]
    Cancelled,
}

impl ArchcryptError {
    /// `true` for errors that abort a whole transcode rather than a single entry.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ArchcryptError::Derivation(_)
                | ArchcryptError::UnsupportedFormat(_)
                | ArchcryptError::Cancelled
        )
    }
}

impl From<zip::result::ZipError> for ArchcryptError {
    fn from(err: zip::result::ZipError) -> Self {
        ArchcryptError::Codec(err.to_string())
    }
}
