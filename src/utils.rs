// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Path helpers shared by the codecs and the transcoder.

use crate::consts::PATH_SEPARATOR;

/// Converts an archive path to forward-slash form.
///
/// ZIP files written on Windows sometimes store `\` separators.
#[inline]
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// `true` for directory marker entries (`"dir/"`).
///
/// Directories are implicit in ZIP/TAR layouts and carry no content to encrypt.
#[inline]
#[must_use]
pub fn is_directory_marker(path: &str) -> bool {
    path.ends_with(PATH_SEPARATOR) || path.ends_with('\\')
}

/// Normalizes a user-supplied prefix to `"a/b/"` form; `None` for an empty prefix.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = normalize_path(prefix)
        .trim_matches(PATH_SEPARATOR)
        .to_owned();
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("{trimmed}{PATH_SEPARATOR}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_markers() {
        assert!(is_directory_marker("dir/"));
        assert!(is_directory_marker("a/b/"));
        assert!(is_directory_marker("win\\"));
        assert!(!is_directory_marker("dir/b.txt"));
        assert!(!is_directory_marker(""));
    }

    #[test]
    fn prefixes_are_slash_terminated() {
        assert_eq!(normalize_prefix("site"), Some("site/".into()));
        assert_eq!(normalize_prefix("/site/"), Some("site/".into()));
        assert_eq!(normalize_prefix("a\\b"), Some("a/b/".into()));
        assert_eq!(normalize_prefix("/"), None);
        assert_eq!(normalize_prefix(""), None);
    }
}
