// src/decryptor/mod.rs

//! Decryption side of the pipeline.
//!
//! Core API: `decrypt_entry(blob, &password, iterations)?` for one blob, or a
//! [`DecryptionSession`] when many blobs share a password.

pub(crate) mod decrypt;
pub(crate) mod session;

pub use decrypt::{decrypt_entry, decrypt_with_session};
pub use session::DecryptionSession;
