//! # Key Derivation
//!
//! Turns a password plus a salt into a 256-bit AES key with PBKDF2-HMAC-SHA256.
//!
//! For most use cases the transcoder handles derivation. The function is exposed for
//! custom flows such as decrypting a single blob pulled out of an archive by hand.

pub mod pbkdf2;
