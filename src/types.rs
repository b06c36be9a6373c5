//! Gallery entry and error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One image file in the flags directory, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw file name as found on disk, extension included
    pub filename: String,
    /// Human-readable label derived from the file name
    pub display_name: String,
    /// `<subdir>/<filename>`, always joined with a forward slash
    pub relative_path: String,
}

impl Entry {
    pub fn new(subdir: &str, filename: &str, display_name: String) -> Self {
        Self {
            filename: filename.to_string(),
            display_name,
            relative_path: format!("{}/{}", subdir, filename),
        }
    }
}

/// Failures the build can run into
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The scan directory is missing or unreadable. Recovered by the scanner.
    #[error("Cannot read flags directory {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template file not found: {0}")]
    TemplateMissing(PathBuf),

    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output and template resolve to the same file
    #[error("Output path {0} is the template itself; refusing to overwrite it")]
    OutputIsTemplate(PathBuf),

    #[error("Failed to load name overrides from {path}: {reason}")]
    OverridesUnreadable { path: PathBuf, reason: String },
}
