use std::fs;
use std::path::{Path, PathBuf};

use crate::types::GalleryError;

/// Subdirectory holding the flag images, also used as the URL prefix
pub const FLAGS_SUBDIR: &str = "flags";
pub const TEMPLATE_FILE: &str = "index_template.html";
pub const OUTPUT_FILE: &str = "index.html";

/// Where the build reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub flags_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub subdir: String,
}

impl BuildPaths {
    /// Standard project layout under `root`
    pub fn from_root(root: &Path) -> Self {
        Self {
            flags_dir: root.join(FLAGS_SUBDIR),
            template: root.join(TEMPLATE_FILE),
            output: root.join(OUTPUT_FILE),
            subdir: FLAGS_SUBDIR.to_string(),
        }
    }

    /// Refuse any layout where writing the output would clobber the template
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.template == self.output {
            return Err(GalleryError::OutputIsTemplate(self.output.clone()));
        }

        if let (Ok(template), Ok(output)) = (
            fs::canonicalize(&self.template),
            fs::canonicalize(&self.output),
        ) {
            if template == output {
                return Err(GalleryError::OutputIsTemplate(self.output.clone()));
            }
        }

        Ok(())
    }
}
