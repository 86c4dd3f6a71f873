// src/encryptor/mod.rs

//! Encryption side of the pipeline.
//!
//! Core API: `encrypt_entry(path, bytes, &session)?` inside a transcode, or
//! `encrypt_blob(bytes, &password, iterations)?` for a single standalone blob.

pub(crate) mod encrypt;
pub(crate) mod session;

pub use encrypt::{encrypt_blob, encrypt_entry};
pub use session::{EncryptionSession, SaltPolicy};
