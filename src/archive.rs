//! src/archive.rs
//! Whole-archive entry points: bytes in, bytes out.
//!
//! Container-level failures (unreadable archive, write error, bad password
//! parameters, cancellation) fail the call. Per-entry failures are reported in
//! the returned [`TranscodeProgress`] and the remaining entries still make it
//! into the output.

use crate::aliases::PasswordBytes;
use crate::codec::ArchiveFormat;
use crate::crypto::kdf::pbkdf2::validate_pbkdf2_params;
use crate::error::ArchcryptError;
use crate::transcoder::{
    transcode, transcode_decrypt, ProgressObserver, TranscodeOptions, TranscodeProgress,
};
use tracing::info;

/// Encrypt every file of an archive into an archive of the same format.
///
/// Each output entry keeps its (possibly rewritten) path and holds
/// `salt || iv || ciphertext+tag`.
pub fn encrypt_archive(
    input: &[u8],
    format: ArchiveFormat,
    password: &PasswordBytes,
    options: &TranscodeOptions,
) -> Result<(Vec<u8>, TranscodeProgress), ArchcryptError> {
    encrypt_archive_with_observer(input, format, password, options, None)
}

/// [`encrypt_archive`] with a per-entry progress callback.
pub fn encrypt_archive_with_observer(
    input: &[u8],
    format: ArchiveFormat,
    password: &PasswordBytes,
    options: &TranscodeOptions,
    observer: Option<&mut dyn ProgressObserver>,
) -> Result<(Vec<u8>, TranscodeProgress), ArchcryptError> {
    validate_pbkdf2_params(password, options.iterations())?;
    let codec = format.codec();
    let mut source = codec.open(input)?;
    let (records, progress) =
        transcode(source.as_mut(), password, options, observer)?.into_archive_entries();
    let output = codec.write(&records)?;
    info!(
        ?format,
        input_len = input.len(),
        output_len = output.len(),
        "archive encrypted"
    );
    Ok((output, progress))
}

/// Reverse of [`encrypt_archive`]: every entry is opened back to plaintext.
///
/// `options.iterations()` must match what the archive was encrypted with.
/// Auxiliary entries in `options` are appended unencrypted as usual.
pub fn decrypt_archive(
    input: &[u8],
    format: ArchiveFormat,
    password: &PasswordBytes,
    options: &TranscodeOptions,
) -> Result<(Vec<u8>, TranscodeProgress), ArchcryptError> {
    validate_pbkdf2_params(password, options.iterations())?;
    let codec = format.codec();
    let mut source = codec.open(input)?;
    let (records, progress) =
        transcode_decrypt(source.as_mut(), password, options, None)?.into_archive_entries();
    let output = codec.write(&records)?;
    info!(?format, entries = records.len(), "archive decrypted");
    Ok((output, progress))
}
