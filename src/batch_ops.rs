//! Parallel transcoding (feature `batch-ops`).
//!
//! The codec is still read sequentially, one window of entries at a time; only
//! the key derivation + sealing of a window runs on the rayon pool. Results are
//! merged in listing order, and output paths are claimed at merge time, so
//! progress and failures match the sequential path whatever the window size.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::aliases::PasswordBytes;
use crate::codec::{ArchiveFormat, EntrySource};
use crate::container::EncryptedEntry;
use crate::crypto::kdf::pbkdf2::validate_pbkdf2_params;
use crate::encryptor::{encrypt_entry, EncryptionSession};
use crate::error::ArchcryptError;
use crate::transcoder::run::{plan_entries, Collector};
use crate::transcoder::{TranscodeOptions, TranscodeProgress, Transcoded};

/// Encrypt every qualifying entry of `source`, sealing up to
/// `rayon::current_num_threads()` entries concurrently.
pub fn transcode_parallel(
    source: &mut dyn EntrySource,
    password: &PasswordBytes,
    options: &TranscodeOptions,
) -> Result<Transcoded<EncryptedEntry>, ArchcryptError> {
    let session = EncryptionSession::new(password, options.iterations(), options.salt_policy())?;
    let plan = plan_entries(source.listing(), options);
    let window = rayon::current_num_threads().max(1);
    debug!(qualifying = plan.len(), window, "parallel transcode started");

    let mut collector = Collector::new(plan.len());
    for chunk in plan.chunks(window) {
        if options.is_cancelled() {
            warn!("parallel transcode cancelled, discarding output");
            return Err(ArchcryptError::Cancelled);
        }

        // Paths taken in earlier windows are known now; the rest is settled at merge.
        let reads: Vec<Result<Vec<u8>, ArchcryptError>> = chunk
            .iter()
            .map(|planned| {
                collector.check_unique(planned)?;
                source.read(planned.index)
            })
            .collect();

        let sealed: Vec<(usize, Result<EncryptedEntry, ArchcryptError>)> = chunk
            .par_iter()
            .zip(reads.into_par_iter())
            .map(|(planned, read)| match read {
                Ok(bytes) => (
                    bytes.len(),
                    encrypt_entry(&planned.output_path, &bytes, &session),
                ),
                Err(error) => (0, Err(error)),
            })
            .collect();

        for (planned, (bytes_in, result)) in chunk.iter().zip(sealed) {
            let result = collector.check_unique(planned).and_then(|()| result);
            collector.merge(planned, bytes_in, result, None)?;
        }
    }

    collector.finish(options.auxiliary())
}

/// Parallel counterpart of [`encrypt_archive`](crate::encrypt_archive).
pub fn encrypt_archive_parallel(
    input: &[u8],
    format: ArchiveFormat,
    password: &PasswordBytes,
    options: &TranscodeOptions,
) -> Result<(Vec<u8>, TranscodeProgress), ArchcryptError> {
    validate_pbkdf2_params(password, options.iterations())?;
    let codec = format.codec();
    let mut source = codec.open(input)?;
    let (records, progress) =
        transcode_parallel(source.as_mut(), password, options)?.into_archive_entries();
    Ok((codec.write(&records)?, progress))
}
