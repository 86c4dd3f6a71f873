//! Transcode progress: a pull-based snapshot plus a push-based observer.

use crate::error::ArchcryptError;

/// One entry that could not be transcoded.
#[derive(Debug)]
pub struct EntryFailure {
    /// Path as it appears in the source archive.
    pub path: String,
    pub error: ArchcryptError,
}

/// Counters for one transcode. Only the transcoder mutates it.
#[derive(Debug, Default)]
pub struct TranscodeProgress {
    total_entries: usize,
    processed_entries: usize,
    failures: Vec<EntryFailure>,
}

impl TranscodeProgress {
    pub(crate) fn new(total_entries: usize) -> Self {
        Self {
            total_entries,
            ..Self::default()
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.processed_entries += 1;
    }

    pub(crate) fn record_failure(&mut self, path: String, error: ArchcryptError) {
        self.processed_entries += 1;
        self.failures.push(EntryFailure { path, error });
    }

    /// Entries that qualified for transcoding (files passing the filter).
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Entries attempted so far, failed ones included.
    #[must_use]
    pub fn processed_entries(&self) -> usize {
        self.processed_entries
    }

    /// Failures in the order they happened.
    #[must_use]
    pub fn failures(&self) -> &[EntryFailure] {
        &self.failures
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.processed_entries - self.failures.len()
    }

    /// Every qualifying entry was processed and none failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.processed_entries == self.total_entries && self.failures.is_empty()
    }
}

/// What happened to a single entry.
#[derive(Debug)]
pub enum EntryOutcome<'a> {
    Transcoded {
        path: &'a str,
        bytes_in: usize,
        bytes_out: usize,
    },
    Failed(&'a EntryFailure),
}

/// Called once after every entry.
pub trait ProgressObserver {
    fn on_entry(&mut self, progress: &TranscodeProgress, outcome: &EntryOutcome<'_>);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&TranscodeProgress, &EntryOutcome<'_>),
{
    fn on_entry(&mut self, progress: &TranscodeProgress, outcome: &EntryOutcome<'_>) {
        self(progress, outcome)
    }
}
