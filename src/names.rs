//! File name to country name normalization

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::types::GalleryError;

/// Built-in corrections, keyed by the lowercased stem exactly as it appears on
/// disk (typos included).
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("uae", "UAE"),
    ("usa", "USA"),
    ("uk", "UK"),
    ("philapiens", "Philippines"),
    ("somailia", "Somalia"),
    ("hondurus", "Honduras"),
    ("vietname", "Vietnam"),
    ("vietnam", "Vietnam"),
    ("knjkh", "Unknown"),
];

/// Lowercased stem -> canonical display name. Built once at startup, never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct OverrideTable {
    names: BTreeMap<String, String>,
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OverrideTable {
    pub fn builtin() -> Self {
        let names = BUILTIN_OVERRIDES
            .iter()
            .map(|(stem, name)| (stem.to_string(), name.to_string()))
            .collect();
        Self { names }
    }

    /// Built-in table with entries from a CONL file layered on top.
    ///
    /// The file holds one `stem = Display Name` pair per line. Stems are
    /// lowercased so lookups stay case-insensitive.
    pub fn with_overrides_file(path: &Path) -> Result<Self, GalleryError> {
        let content = fs::read_to_string(path).map_err(|e| GalleryError::OverridesUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let extra: BTreeMap<String, String> =
            serde_conl::from_str(&content).map_err(|e| GalleryError::OverridesUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut table = Self::builtin();
        for (stem, name) in extra {
            table.names.insert(stem.to_lowercase(), name);
        }
        Ok(table)
    }

    pub fn get(&self, stem: &str) -> Option<&str> {
        self.names.get(&stem.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Map a raw file name to its display name.
    ///
    /// Overrides win; otherwise the first character is uppercased and the
    /// rest lowercased as one run (`costa_rica.png` -> `Costa_rica`).
    pub fn normalize(&self, filename: &str) -> String {
        let stem = file_stem(filename);

        if let Some(name) = self.get(stem) {
            return name.to_string();
        }

        let mut chars = stem.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        }
    }
}

/// Strip the last extension. A leading dot alone doesn't count (`.png` is its
/// own stem).
fn file_stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(idx) => &filename[..idx],
    }
}
