//! # Constants
//!
//! KDF parameters and the byte sizes of the encrypted container layout.

/// Minimum allowed PBKDF2 iteration count.
///
/// Iterations can be configured upward from here, never below it.
pub const PBKDF2_MIN_ITER: u32 = 100_000;

/// Maximum allowed PBKDF2 iteration count.
///
/// Set to `5_000_000` to keep a single derivation within a few seconds.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Default PBKDF2 iteration count for encryption operations.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = PBKDF2_MIN_ITER;

/// Salt size in bytes.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce size in bytes (96 bits).
pub const IV_LEN: usize = 12;

/// AES-GCM authentication tag size in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Fixed prefix of every container blob: `salt || iv`.
pub const CONTAINER_HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// Separator used for archive-relative paths.
pub const PATH_SEPARATOR: char = '/';
