use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::names::OverrideTable;
use crate::types::{Entry, GalleryError};

/// Supported image extensions (compared lowercased, without the dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Whether a file name carries one of the supported image extensions
pub fn is_image_file(filename: &str) -> bool {
    match filename.rfind('.') {
        Some(0) | None => false,
        Some(idx) => {
            let ext = filename[idx + 1..].to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
    }
}

/// List the image files in `dir` as entries sorted by display name.
///
/// Fails with `DirectoryUnavailable` if the directory can't be listed.
pub fn scan(dir: &Path, subdir: &str, names: &OverrideTable) -> Result<Vec<Entry>, GalleryError> {
    let unavailable = |source: io::Error| GalleryError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(unavailable)? {
        let dir_entry = dir_entry.map_err(unavailable)?;

        // Follows symlinks, so a link to a directory is skipped too
        if fs::metadata(dir_entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            continue;
        }

        let filename = match dir_entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::warn!("Skipping non UTF-8 file name: {}", raw.to_string_lossy());
                continue;
            }
        };

        if !is_image_file(&filename) {
            continue;
        }

        let display_name = names.normalize(&filename);
        entries.push(Entry::new(subdir, &filename, display_name));
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Same as [`scan`], but an unreadable directory is logged and treated as empty
pub fn scan_or_empty(dir: &Path, subdir: &str, names: &OverrideTable) -> Vec<Entry> {
    match scan(dir, subdir, names) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}

/// Stable sort by display name in collation order
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| collate(&a.display_name, &b.display_name));
}

/// Collation key levels for one name, after canonical decomposition.
///
/// Primary: base letters, lowercased, combining marks dropped.
/// Secondary: the combining marks attached to each base letter.
/// Tertiary: whether each base letter was uppercase.
struct CollationKey {
    primary: Vec<char>,
    accents: Vec<Vec<char>>,
    case: Vec<bool>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut primary = Vec::new();
        let mut accents: Vec<Vec<char>> = Vec::new();
        let mut case = Vec::new();

        for c in s.nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = accents.last_mut() {
                    marks.push(c);
                }
                continue;
            }
            primary.extend(c.to_lowercase());
            accents.push(Vec::new());
            case.push(c.is_uppercase());
        }

        Self {
            primary,
            accents,
            case,
        }
    }
}

/// Dictionary-style comparison in the manner of the Unicode root collation:
/// base letters first, then accents, then lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (a, b) = (CollationKey::new(a), CollationKey::new(b));

    a.primary
        .cmp(&b.primary)
        .then_with(|| a.accents.cmp(&b.accents))
        .then_with(|| a.case.cmp(&b.case))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.display_name.as_str()).collect()
    }

    #[test]
    fn test_is_image_file() {
        for name in [
            "a.png", "a.PNG", "a.jpg", "a.JpEg", "a.gif", "a.webp", "a.SVG",
        ] {
            assert!(is_image_file(name), "{} should be accepted", name);
        }
        for name in ["a.bmp", "a.txt", "a", ".png", "png", "a.png.bak", ""] {
            assert!(!is_image_file(name), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zambia.png", "Brazil.png", "uae.png", "README.md", "notes"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        let entries = scan(dir.path(), "flags", &OverrideTable::builtin()).unwrap();
        assert_eq!(names(&entries), vec!["Brazil", "UAE", "Zambia"]);
        assert_eq!(entries[1].filename, "uae.png");
        assert_eq!(entries[1].relative_path, "flags/uae.png");
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("flags");

        let result = scan(&missing, "flags", &OverrideTable::builtin());
        assert!(matches!(
            result,
            Err(GalleryError::DirectoryUnavailable { .. })
        ));
        assert!(scan_or_empty(&missing, "flags", &OverrideTable::builtin()).is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut entries = vec![
            Entry::new("flags", "vietname.png", "Vietnam".to_string()),
            Entry::new("flags", "chad.png", "Chad".to_string()),
            Entry::new("flags", "vietnam.svg", "Vietnam".to_string()),
        ];
        sort_entries(&mut entries);
        let files: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(files, vec!["chad.png", "vietname.png", "vietnam.svg"]);
    }

    #[test]
    fn test_collate_is_not_byte_order() {
        // Byte order would put every uppercase letter before "a"
        assert_eq!(collate("albania", "Zambia"), Ordering::Less);
        assert_eq!(collate("UAE", "Uganda"), Ordering::Less);
        assert_eq!(collate("Éire", "Fiji"), Ordering::Less);
        assert_eq!(collate("Egypt", "Éire"), Ordering::Less);
        assert_eq!(collate("chad", "Chad"), Ordering::Less);
        assert_eq!(collate("Chad", "Chad"), Ordering::Equal);
        assert_eq!(collate("Việt Nam", "Vietnam"), Ordering::Less);
        assert_eq!(collate("Việt Nam", "Zambia"), Ordering::Less);
        assert_eq!(collate("Ĉeĥio", "Chad"), Ordering::Less);
    }

    #[test]
    fn test_collate_decomposed_names() {
        assert_eq!(collate("E\u{301}ire", "Eireann"), Ordering::Less);
        assert_eq!(collate("E\u{301}ire", "\u{c9}ire"), Ordering::Equal);
        assert_eq!(collate("Co\u{302}te", "Cote"), Ordering::Greater);
    }

    #[test]
    fn test_collate_accents_before_case() {
        assert_eq!(collate("Elan", "élan"), Ordering::Less);
        assert_eq!(collate("élan", "Élan"), Ordering::Less);
        assert_eq!(collate("elan", "Elan"), Ordering::Less);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "chad.png");
        fs::write(dir.path().join(OsStr::from_bytes(b"\xff.png")), b"").unwrap();

        let entries = scan(dir.path(), "flags", &OverrideTable::builtin()).unwrap();
        assert_eq!(names(&entries), vec!["Chad"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linked.png")).unwrap();
        touch(dir.path(), "chad.png");

        let entries = scan(dir.path(), "flags", &OverrideTable::builtin()).unwrap();
        assert_eq!(names(&entries), vec!["Chad"]);
    }
}
