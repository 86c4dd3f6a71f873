//! src/transcoder/run.rs
//! The read-entry → transform → collect loop

use crate::aliases::PasswordBytes;
use crate::codec::{EntryInfo, EntrySource};
use crate::container::EncryptedEntry;
use crate::decryptor::{decrypt_with_session, DecryptionSession};
use crate::encryptor::{encrypt_entry, EncryptionSession};
use crate::error::ArchcryptError;
use crate::transcoder::options::TranscodeOptions;
use crate::transcoder::progress::{EntryOutcome, ProgressObserver, TranscodeProgress};
use crate::utils::is_directory_marker;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A recovered plaintext entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedEntry {
    pub path: String,
    pub plaintext: Vec<u8>,
}

/// Anything the transcoder can place into an output archive.
pub trait ArchiveRecord {
    fn path(&self) -> &str;
    fn byte_len(&self) -> usize;
    fn into_record(self) -> (String, Vec<u8>);
}

impl ArchiveRecord for EncryptedEntry {
    fn path(&self) -> &str {
        &self.path
    }

    fn byte_len(&self) -> usize {
        self.blob_len()
    }

    fn into_record(self) -> (String, Vec<u8>) {
        let blob = self.to_blob();
        (self.path, blob)
    }
}

impl ArchiveRecord for DecryptedEntry {
    fn path(&self) -> &str {
        &self.path
    }

    fn byte_len(&self) -> usize {
        self.plaintext.len()
    }

    fn into_record(self) -> (String, Vec<u8>) {
        (self.path, self.plaintext)
    }
}

/// Output of a transcode: transformed entries, auxiliary files, and progress.
#[derive(Debug)]
pub struct Transcoded<T> {
    pub entries: Vec<T>,
    /// Unencrypted files appended after the entries, in caller order.
    pub auxiliary: Vec<(String, Vec<u8>)>,
    pub progress: TranscodeProgress,
}

impl<T: ArchiveRecord> Transcoded<T> {
    /// `(path, bytes)` pairs ready for [`ArchiveCodec::write`](crate::codec::ArchiveCodec::write).
    #[must_use]
    pub fn into_archive_entries(self) -> (Vec<(String, Vec<u8>)>, TranscodeProgress) {
        let mut records: Vec<_> = self
            .entries
            .into_iter()
            .map(ArchiveRecord::into_record)
            .collect();
        records.extend(self.auxiliary);
        (records, self.progress)
    }
}

/// A source entry selected for transcoding.
#[derive(Debug, Clone)]
pub(crate) struct PlannedEntry {
    pub index: usize,
    pub source_path: String,
    pub output_path: String,
}

/// Select qualifying entries in listing order: no directory markers, filter applied,
/// rewrite applied (an empty or directory-like rewrite drops the entry).
pub(crate) fn plan_entries(listing: &[EntryInfo], options: &TranscodeOptions) -> Vec<PlannedEntry> {
    listing
        .iter()
        .enumerate()
        .filter_map(|(index, info)| {
            if info.is_dir || is_directory_marker(&info.path) {
                return None;
            }
            if !options.accepts(&info.path) {
                debug!(path = %info.path, "filtered out");
                return None;
            }
            let output_path = options.rewrite(&info.path);
            if output_path.is_empty() || is_directory_marker(&output_path) {
                debug!(path = %info.path, "rewrite left no file name, skipping");
                return None;
            }
            Some(PlannedEntry {
                index,
                source_path: info.path.clone(),
                output_path,
            })
        })
        .collect()
}

/// Single collector for transformed entries; enforces output path uniqueness.
pub(crate) struct Collector<T> {
    seen: HashSet<String>,
    entries: Vec<T>,
    progress: TranscodeProgress,
}

impl<T: ArchiveRecord> Collector<T> {
    pub fn new(total_entries: usize) -> Self {
        Self {
            seen: HashSet::new(),
            entries: Vec::with_capacity(total_entries),
            progress: TranscodeProgress::new(total_entries),
        }
    }

    pub fn check_unique(&self, planned: &PlannedEntry) -> Result<(), ArchcryptError> {
        if self.seen.contains(&planned.output_path) {
            Err(ArchcryptError::DuplicatePath(planned.output_path.clone()))
        } else {
            Ok(())
        }
    }

    /// Merge one entry's result. Fatal errors are handed back to abort the run.
    pub fn merge(
        &mut self,
        planned: &PlannedEntry,
        bytes_in: usize,
        result: Result<T, ArchcryptError>,
        observer: Option<&mut (dyn ProgressObserver + '_)>,
    ) -> Result<(), ArchcryptError> {
        match result {
            Ok(entry) => {
                let bytes_out = entry.byte_len();
                debug!(path = %planned.source_path, output = %entry.path(), bytes_in, bytes_out, "entry transcoded");
                self.seen.insert(entry.path().to_owned());
                self.entries.push(entry);
                self.progress.record_success();
                if let Some(observer) = observer {
                    observer.on_entry(
                        &self.progress,
                        &EntryOutcome::Transcoded {
                            path: &planned.output_path,
                            bytes_in,
                            bytes_out,
                        },
                    );
                }
            }
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => {
                warn!(path = %planned.source_path, %error, "entry skipped");
                self.progress
                    .record_failure(planned.source_path.clone(), error);
                if let (Some(observer), Some(failure)) = (observer, self.progress.failures().last())
                {
                    observer.on_entry(&self.progress, &EntryOutcome::Failed(failure));
                }
            }
        }
        Ok(())
    }

    /// Append auxiliary files and hand back the result.
    pub fn finish(
        self,
        auxiliary: &[(String, Vec<u8>)],
    ) -> Result<Transcoded<T>, ArchcryptError> {
        let mut auxiliary_paths = HashSet::new();
        for (path, _) in auxiliary {
            if self.seen.contains(path) || !auxiliary_paths.insert(path.as_str()) {
                return Err(ArchcryptError::DuplicatePath(path.clone()));
            }
        }

        info!(
            total = self.progress.total_entries(),
            processed = self.progress.processed_entries(),
            failed = self.progress.failure_count(),
            auxiliary = auxiliary.len(),
            "transcode finished"
        );

        Ok(Transcoded {
            entries: self.entries,
            auxiliary: auxiliary.to_vec(),
            progress: self.progress,
        })
    }
}

/// The per-entry step of a transcode.
pub(crate) trait EntryTransform {
    type Output: ArchiveRecord;

    fn apply(&mut self, output_path: &str, bytes: &[u8]) -> Result<Self::Output, ArchcryptError>;
}

struct Seal<'s, 'p>(&'s EncryptionSession<'p>);

impl EntryTransform for Seal<'_, '_> {
    type Output = EncryptedEntry;

    fn apply(&mut self, output_path: &str, bytes: &[u8]) -> Result<EncryptedEntry, ArchcryptError> {
        encrypt_entry(output_path, bytes, self.0)
    }
}

struct Open<'p>(DecryptionSession<'p>);

impl EntryTransform for Open<'_> {
    type Output = DecryptedEntry;

    fn apply(&mut self, output_path: &str, bytes: &[u8]) -> Result<DecryptedEntry, ArchcryptError> {
        Ok(DecryptedEntry {
            path: output_path.to_owned(),
            plaintext: decrypt_with_session(bytes, &mut self.0)?,
        })
    }
}

pub(crate) fn run_loop<X: EntryTransform>(
    source: &mut dyn EntrySource,
    options: &TranscodeOptions,
    transform: &mut X,
    mut observer: Option<&mut dyn ProgressObserver>,
) -> Result<Transcoded<X::Output>, ArchcryptError> {
    let plan = plan_entries(source.listing(), options);
    info!(
        records = source.listing().len(),
        qualifying = plan.len(),
        "transcode started"
    );

    let mut collector = Collector::new(plan.len());
    for planned in &plan {
        if options.is_cancelled() {
            warn!(
                processed = collector.progress.processed_entries(),
                "transcode cancelled, discarding output"
            );
            return Err(ArchcryptError::Cancelled);
        }

        let mut bytes_in = 0;
        let result = collector.check_unique(planned).and_then(|()| {
            let bytes = source.read(planned.index)?;
            bytes_in = bytes.len();
            transform.apply(&planned.output_path, &bytes)
        });
        collector.merge(planned, bytes_in, result, observer.as_deref_mut())?;
    }

    collector.finish(options.auxiliary())
}

/// Encrypt every qualifying entry of `source`.
///
/// Per-entry failures end up in [`TranscodeProgress::failures`]; the call itself only
/// fails for derivation errors, cancellation, or a colliding auxiliary path.
pub fn transcode(
    source: &mut dyn EntrySource,
    password: &PasswordBytes,
    options: &TranscodeOptions,
    observer: Option<&mut dyn ProgressObserver>,
) -> Result<Transcoded<EncryptedEntry>, ArchcryptError> {
    let session = EncryptionSession::new(password, options.iterations(), options.salt_policy())?;
    run_loop(source, options, &mut Seal(&session), observer)
}

/// Decrypt every qualifying entry of `source` (the inverse of [`transcode`]).
///
/// `options.iterations()` must match the count used for encryption; a mismatch
/// shows up as per-entry authentication failures.
pub fn transcode_decrypt(
    source: &mut dyn EntrySource,
    password: &PasswordBytes,
    options: &TranscodeOptions,
    observer: Option<&mut dyn ProgressObserver>,
) -> Result<Transcoded<DecryptedEntry>, ArchcryptError> {
    let session = DecryptionSession::new(password, options.iterations())?;
    run_loop(source, options, &mut Open(session), observer)
}
