//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, PasswordBytes};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER, SALT_LEN};
use crate::ArchcryptError;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Check the inputs of a PBKDF2 derivation without running it.
///
/// Used by the transcoder to fail fast before touching any entry.
pub fn validate_pbkdf2_params(
    password: &PasswordBytes,
    iterations: u32,
) -> Result<(), ArchcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ArchcryptError::Derivation("empty password".into()));
    }
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(ArchcryptError::Derivation(format!(
            "PBKDF2 iterations must be within {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }
    Ok(())
}

/// Derive PBKDF2-HMAC-SHA256 directly into an `Aes256Key32` buffer
///
/// Deterministic in `(password, salt, iterations)`. The salt must be exactly
/// 16 bytes; it is taken as a slice so salts read back from a container can be
/// passed without conversion.
///
/// # Errors
///
/// [`ArchcryptError::Derivation`] for an empty password, a salt of the wrong
/// length, or iterations outside `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
#[inline]
pub fn derive_secure_pbkdf2_key(
    password: &PasswordBytes,
    salt: &[u8],
    iterations: u32,
    out_key: &mut Aes256Key32,
) -> Result<(), ArchcryptError> {
    validate_pbkdf2_params(password, iterations)?;
    if salt.len() != SALT_LEN {
        return Err(ArchcryptError::Derivation(format!(
            "salt must be exactly {SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }

    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret(),
        salt,
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| ArchcryptError::Derivation(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::password_from_str;

    #[test]
    fn rejects_iterations_below_floor() {
        let password = password_from_str("pw");
        let mut key = Aes256Key32::new([0u8; 32]);
        let err =
            derive_secure_pbkdf2_key(&password, &[0u8; 16], PBKDF2_MIN_ITER - 1, &mut key)
                .unwrap_err();
        assert!(matches!(err, ArchcryptError::Derivation(_)));
        assert_eq!(key.expose_secret(), &[0u8; 32], "output untouched on error");
    }

    #[test]
    fn rejects_short_salt() {
        let password = password_from_str("pw");
        let mut key = Aes256Key32::new([0u8; 32]);
        let err = derive_secure_pbkdf2_key(&password, &[0u8; 15], PBKDF2_MIN_ITER, &mut key)
            .unwrap_err();
        assert!(err.to_string().contains("salt must be exactly 16 bytes"));
    }
}
