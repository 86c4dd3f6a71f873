//! # Archive Codecs
//!
//! The transcoder only sees the [`EntrySource`] listing and [`ArchiveCodec::write`],
//! so it does not care which format it is working on. Two implementations are
//! provided, selected by file extension through [`ArchiveFormat`]:
//!
//! - [`ZipCodec`] - ZIP via the `zip` crate (Deflate on write)
//! - [`TarGzCodec`] - gzip-compressed TAR via `flate2` + `tar`
//!
//! [`MemorySource`] is a plain in-memory listing, used by the TAR codec and handy
//! for feeding hand-built entries into a transcode.

mod memory;
mod tar_gz;
mod zip_codec;

pub use memory::MemorySource;
pub use tar_gz::TarGzCodec;
pub use zip_codec::ZipCodec;

use crate::error::ArchcryptError;

/// One record of an opened archive, in codec order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Archive-relative path with `/` separators. Directories end in `/`.
    pub path: String,
    pub is_dir: bool,
}

impl EntryInfo {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// An opened archive: the listing up front, entry bytes on demand.
pub trait EntrySource {
    /// All records in the order the codec yields them.
    fn listing(&self) -> &[EntryInfo];

    /// Read (and decompress) the bytes of record `index`.
    ///
    /// A failure here concerns this entry only.
    fn read(&mut self, index: usize) -> Result<Vec<u8>, ArchcryptError>;
}

/// Archive container capability: `open` and `write`.
pub trait ArchiveCodec: Send + Sync {
    fn open<'a>(&self, bytes: &'a [u8]) -> Result<Box<dyn EntrySource + 'a>, ArchcryptError>;

    fn write(&self, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ArchcryptError>;
}

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    /// Pick a format from a file name (`.zip`, `.tar.gz`, `.tgz`; case-insensitive).
    pub fn from_file_name(name: &str) -> Result<Self, ArchcryptError> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".zip") {
            Ok(ArchiveFormat::Zip)
        } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Ok(ArchiveFormat::TarGz)
        } else {
            Err(ArchcryptError::UnsupportedFormat(name.to_owned()))
        }
    }

    #[must_use]
    pub fn codec(self) -> &'static dyn ArchiveCodec {
        match self {
            ArchiveFormat::Zip => &ZipCodec,
            ArchiveFormat::TarGz => &TarGzCodec,
        }
    }
}
