//! In-memory entry listing.

use super::{EntryInfo, EntrySource};
use crate::error::ArchcryptError;

/// Entries held in memory, each either readable bytes or a stored read error.
#[derive(Debug, Default)]
pub struct MemorySource {
    listing: Vec<EntryInfo>,
    contents: Vec<Option<Result<Vec<u8>, ArchcryptError>>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a regular file.
    pub fn push_file(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.push(EntryInfo::file(path), Ok(bytes.into()));
    }

    /// Append a directory marker; a trailing `/` is added when missing.
    pub fn push_dir(&mut self, path: impl Into<String>) {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        self.push(EntryInfo::dir(path), Ok(Vec::new()));
    }

    /// Append a file whose bytes cannot be read.
    pub fn push_unreadable(&mut self, path: impl Into<String>, error: ArchcryptError) {
        self.push(EntryInfo::file(path), Err(error));
    }

    pub(crate) fn push(&mut self, info: EntryInfo, contents: Result<Vec<u8>, ArchcryptError>) {
        self.listing.push(info);
        self.contents.push(Some(contents));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listing.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }
}

impl<P, B> FromIterator<(P, B)> for MemorySource
where
    P: Into<String>,
    B: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        let mut source = MemorySource::new();
        for (path, bytes) in iter {
            let path = path.into();
            if path.ends_with('/') {
                source.push_dir(path);
            } else {
                source.push_file(path, bytes);
            }
        }
        source
    }
}

impl EntrySource for MemorySource {
    fn listing(&self) -> &[EntryInfo] {
        &self.listing
    }

    /// Hands the bytes over; each entry can be read once.
    fn read(&mut self, index: usize) -> Result<Vec<u8>, ArchcryptError> {
        self.contents
            .get_mut(index)
            .and_then(Option::take)
            .unwrap_or_else(|| {
                Err(ArchcryptError::Codec(format!(
                    "entry #{index} is missing or was already read"
                )))
            })
    }
}
