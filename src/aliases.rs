//! # Secure-Gate Type Aliases
//!
//! Type aliases over [`secure-gate`](https://github.com/Slurp9187/secure-gate) wrappers.
//! Every secret (and every value that travels next to one) is wrapped from birth,
//! and access requires an explicit `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ## Fixed-Size Types
//! - [`Aes256Key32`] - 32-byte AES-256 key derived from the password
//! - [`Salt16`] - 16-byte PBKDF2 salt
//! - [`Iv12`] - 12-byte AES-GCM nonce
//!
//! ## Dynamic Secrets
//! - [`PasswordBytes`] - the user-supplied password as raw bytes

use secure_gate::{Dynamic, Fixed};

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size values, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SpanBuffer<32>; // PBKDF2 output, AES-GCM key
pub type Iv12 = SpanBuffer<12>; // AES-GCM nonce, stored in the clear
pub type Salt16 = SpanBuffer<16>; // PBKDF2 salt, stored in the clear

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PasswordBytes = Dynamic<Vec<u8>>;

/// Wrap a UTF-8 password string.
#[inline]
pub fn password_from_str(password: &str) -> PasswordBytes {
    PasswordBytes::new(password.as_bytes().to_vec())
}
