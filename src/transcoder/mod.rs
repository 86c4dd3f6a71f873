// src/transcoder/mod.rs

//! Archive transcoding: drive every entry of an opened archive through the
//! entry cipher, one at a time.
//!
//! Core API: `transcode(&mut source, &password, &options, observer)?` to encrypt,
//! `transcode_decrypt(...)` for the reverse direction.
//!
//! - Entries are visited in codec order; directory markers are skipped.
//! - One bad entry never aborts the run: its error lands in
//!   [`TranscodeProgress::failures`] and the loop continues.
//! - Output paths are unique; a clash is recorded as a per-entry failure.

pub(crate) mod options;
pub(crate) mod progress;
pub(crate) mod run;

pub use options::{CancelToken, PathFilter, PathRewrite, TranscodeOptions};
pub use progress::{EntryFailure, EntryOutcome, ProgressObserver, TranscodeProgress};
pub use run::{transcode, transcode_decrypt, ArchiveRecord, DecryptedEntry, Transcoded};
