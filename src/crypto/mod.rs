// src/crypto/mod.rs

//! Low-level crypto primitives: KDF, AEAD, randomness.
//!
//! See crate root for re-exports (e.g. `derive_secure_pbkdf2_key`).

pub mod aead;
pub mod kdf;
pub mod rng;
