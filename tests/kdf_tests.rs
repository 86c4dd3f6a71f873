//! tests/kdf_tests.rs
//! PBKDF2-HMAC-SHA256 derivation: determinism, input sensitivity, bounds

mod common;

use archcrypt_rs::aliases::{password_from_str, Aes256Key32};
use archcrypt_rs::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use archcrypt_rs::{derive_secure_pbkdf2_key, ArchcryptError, Pbkdf2Builder};
use common::TEST_PASSWORD;

const SALT_A: [u8; 16] = [0x11; 16];
const SALT_B: [u8; 16] = [0x22; 16];

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_secure_pbkdf2_key(&password_from_str(password), salt, iterations, &mut key).unwrap();
    *key.expose_secret()
}

/// Known-answer vectors, hex-encoded (OpenSSL PBKDF2-HMAC-SHA256, 32-byte output).
const VECTORS: &[(&str, &[u8], u32, &str)] = &[
    (
        "secret",
        &[0x11; 16],
        100_000,
        "2cd1c0c095e1b1b6bfd3cd8ab6fcbdcfec047e8ebc70719cf8e01a2eae0e6488",
    ),
    (
        "password",
        b"saltSALTsaltSALT",
        100_000,
        "a7e3b4657d7ec5eee255d87157b73f2907eb21576c3926644f9ed7664dcc6e5d",
    ),
];

#[test]
fn known_answer_vectors() {
    for (password, salt, iterations, expected) in VECTORS {
        assert_eq!(
            hex::encode(derive(password, salt, *iterations)),
            *expected,
            "password={password}"
        );
    }
}

#[test]
fn same_inputs_same_key() {
    assert_eq!(
        derive(TEST_PASSWORD, &SALT_A, PBKDF2_MIN_ITER),
        derive(TEST_PASSWORD, &SALT_A, PBKDF2_MIN_ITER)
    );
}

#[test]
fn every_input_changes_the_key() {
    let base = derive(TEST_PASSWORD, &SALT_A, PBKDF2_MIN_ITER);

    let cases: &[(&str, &[u8], u32)] = &[
        ("Secret", &SALT_A, PBKDF2_MIN_ITER),
        (TEST_PASSWORD, &SALT_B, PBKDF2_MIN_ITER),
        (TEST_PASSWORD, &SALT_A, PBKDF2_MIN_ITER + 1),
    ];
    for (password, salt, iterations) in cases {
        assert_ne!(
            derive(password, salt, *iterations),
            base,
            "password={password} iterations={iterations}"
        );
    }
}

#[test]
fn rejects_invalid_parameters() {
    let mut key = Aes256Key32::new([0u8; 32]);
    let cases: &[(&str, &[u8], u32)] = &[
        ("", &SALT_A, PBKDF2_MIN_ITER),
        (TEST_PASSWORD, &SALT_A[..8], PBKDF2_MIN_ITER),
        (TEST_PASSWORD, &SALT_A, 0),
        (TEST_PASSWORD, &SALT_A, PBKDF2_MAX_ITER + 1),
    ];
    for (password, salt, iterations) in cases {
        let err =
            derive_secure_pbkdf2_key(&password_from_str(password), salt, *iterations, &mut key)
                .unwrap_err();
        assert!(matches!(err, ArchcryptError::Derivation(_)), "{err}");
    }
}

#[test]
fn builder_uses_its_salt() {
    let builder = Pbkdf2Builder::new()
        .unwrap()
        .with_salt(SALT_B)
        .with_iterations(PBKDF2_MIN_ITER);

    let key = builder
        .derive_secure_new(&password_from_str(TEST_PASSWORD))
        .unwrap();
    assert_eq!(
        *key.expose_secret(),
        derive(TEST_PASSWORD, &SALT_B, PBKDF2_MIN_ITER)
    );
}
