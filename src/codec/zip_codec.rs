//! ZIP container via the `zip` crate.

use super::{ArchiveCodec, EntryInfo, EntrySource};
use crate::error::ArchcryptError;
use crate::utils::{is_directory_marker, normalize_path};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Upper bound on the up-front allocation for one entry; the declared size is untrusted.
const MAX_PREALLOC: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipCodec;

/// Opened ZIP: listing from the central directory, one entry decompressed per `read`.
pub struct ZipSource<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    listing: Vec<EntryInfo>,
}

impl<'a> ZipSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, ArchcryptError> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;

        let listing = (0..archive.len())
            .map(|index| {
                let name = archive.name_for_index(index).ok_or_else(|| {
                    ArchcryptError::Codec(format!("central directory has no entry #{index}"))
                })?;
                let path = normalize_path(name);
                let is_dir = is_directory_marker(&path);
                Ok(EntryInfo { path, is_dir })
            })
            .collect::<Result<Vec<_>, ArchcryptError>>()?;

        Ok(Self { archive, listing })
    }
}

impl EntrySource for ZipSource<'_> {
    fn listing(&self) -> &[EntryInfo] {
        &self.listing
    }

    /// CRC mismatches surface here, when the entry is read to the end.
    fn read(&mut self, index: usize) -> Result<Vec<u8>, ArchcryptError> {
        let mut file = self.archive.by_index(index)?;
        let mut buf = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
        file.read_to_end(&mut buf)
            .map_err(|e| ArchcryptError::Codec(format!("{}: {e}", file.name())))?;
        Ok(buf)
    }
}

impl ArchiveCodec for ZipCodec {
    fn open<'a>(&self, bytes: &'a [u8]) -> Result<Box<dyn EntrySource + 'a>, ArchcryptError> {
        Ok(Box::new(ZipSource::new(bytes)?))
    }

    fn write(&self, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ArchcryptError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for (path, bytes) in entries {
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            writer.start_file(path.as_str(), options)?;
            writer
                .write_all(bytes)
                .map_err(|e| ArchcryptError::Codec(format!("{path}: {e}")))?;
        }

        Ok(writer.finish()?.into_inner())
    }
}
