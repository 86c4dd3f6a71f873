//! gzip-compressed TAR via `flate2` + `tar`.
//!
//! A TAR stream cannot be indexed without walking it, so `open` gunzips and walks
//! the whole archive once, keeping each entry's bytes (or its read error) in a
//! [`MemorySource`].

use super::{ArchiveCodec, EntryInfo, EntrySource, MemorySource};
use crate::error::ArchcryptError;
use crate::utils::normalize_path;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Read;
use tar::{Archive, Builder, EntryType, Header};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzCodec;

fn codec_err(context: &str) -> impl Fn(std::io::Error) -> ArchcryptError + '_ {
    move |e| ArchcryptError::Codec(format!("{context}: {e}"))
}

impl ArchiveCodec for TarGzCodec {
    fn open<'a>(&self, bytes: &'a [u8]) -> Result<Box<dyn EntrySource + 'a>, ArchcryptError> {
        let mut tar_bytes = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut tar_bytes)
            .map_err(codec_err("gunzip"))?;

        let mut archive = Archive::new(tar_bytes.as_slice());
        let mut source = MemorySource::new();

        for entry in archive.entries().map_err(codec_err("tar"))? {
            let mut entry = entry.map_err(codec_err("tar header"))?;
            let kind = entry.header().entry_type();
            let raw_path = entry.path().map_err(codec_err("tar path"))?;
            let path = normalize_path(&raw_path.to_string_lossy());

            if kind.is_dir() {
                let path = if path.ends_with('/') { path } else { format!("{path}/") };
                source.push(EntryInfo::dir(path), Ok(Vec::new()));
            } else if kind.is_file() {
                let mut data = Vec::new();
                let contents = entry
                    .read_to_end(&mut data)
                    .map(|_| data)
                    .map_err(codec_err(&path));
                source.push(EntryInfo::file(path), contents);
            } else {
                debug!(path = %path, kind = ?kind, "skipping non-regular tar entry");
            }
        }

        Ok(Box::new(source))
    }

    fn write(&self, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, ArchcryptError> {
        let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));

        for (path, bytes) in entries {
            let mut header = Header::new_gnu();
            header.set_entry_type(EntryType::Regular);
            header.set_size(bytes.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(0);
            builder
                .append_data(&mut header, path, bytes.as_slice())
                .map_err(codec_err(path))?;
        }

        builder
            .into_inner()
            .map_err(codec_err("tar finish"))?
            .finish()
            .map_err(codec_err("gzip finish"))
    }
}
