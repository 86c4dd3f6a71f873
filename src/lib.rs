// src/lib.rs

pub mod aliases;
pub mod archive;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod container;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod transcoder;
pub mod utils;

// Whole-archive API
pub use archive::{decrypt_archive, encrypt_archive, encrypt_archive_with_observer};
pub use codec::{ArchiveCodec, ArchiveFormat, EntrySource, MemorySource};
pub use error::ArchcryptError;

// Entry-level API
pub use container::EncryptedEntry;
pub use decryptor::{decrypt_entry, DecryptionSession};
pub use encryptor::{encrypt_blob, encrypt_entry, EncryptionSession, SaltPolicy};
pub use transcoder::{
    transcode, transcode_decrypt, CancelToken, EntryFailure, ProgressObserver, TranscodeOptions,
    TranscodeProgress, Transcoded,
};

// Key derivation, for callers that manage salts themselves
pub use builders::Pbkdf2Builder;
pub use crypto::kdf::pbkdf2::derive_secure_pbkdf2_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{encrypt_archive_parallel, transcode_parallel};
