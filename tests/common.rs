//! tests/common.rs
//! Shared fixtures: passwords, options, and archive builders

use archcrypt_rs::aliases::{password_from_str, PasswordBytes};
use archcrypt_rs::{SaltPolicy, TranscodeOptions};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Standard test password
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "secret";

/// Stored-entry payload that can be located and corrupted inside a ZIP
#[allow(dead_code)]
pub const CORRUPTIBLE: &str = "BBBBBBBBBBBBBBBB";

#[allow(dead_code)]
pub fn password() -> PasswordBytes {
    password_from_str(TEST_PASSWORD)
}

/// One key derivation per run instead of one per entry
#[allow(dead_code)]
pub fn fast_options() -> TranscodeOptions {
    TranscodeOptions::new().with_salt_policy(SaltPolicy::PerSession)
}

/// ZIP with `Stored` entries, so payload bytes appear verbatim in the archive
#[allow(dead_code)]
pub fn stored_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (path, bytes) in entries {
        if path.ends_with('/') {
            writer.add_directory(*path, options).unwrap();
        } else {
            writer.start_file(*path, options).unwrap();
            writer.write_all(bytes.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Flip one byte in the middle of the last occurrence of `needle`; the entry's CRC
/// no longer matches.
///
/// The last match is the payload itself: an earlier one may start at a file name
/// that shares a prefix with the payload.
#[allow(dead_code)]
pub fn corrupt(archive: &mut [u8], needle: &[u8]) {
    let at = archive
        .windows(needle.len())
        .rposition(|w| w == needle)
        .expect("payload not found in archive");
    archive[at + needle.len() / 2] ^= 0x01;
}

/// Read every file of a ZIP back as `(path, bytes)`
#[allow(dead_code)]
pub fn read_zip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .filter_map(|i| {
            let mut file = archive.by_index(i).unwrap();
            if file.is_dir() {
                return None;
            }
            let mut buf = Vec::new();
            std::io::Read::read_to_end(&mut file, &mut buf).unwrap();
            Some((file.name().to_string(), buf))
        })
        .collect()
}
