use std::path::PathBuf;

use crate::config::BuildPaths;
use crate::names::OverrideTable;
use crate::render::{render, RenderOptions};
use crate::scan::scan_or_empty;
use crate::template::materialize_file;
use crate::types::{Entry, GalleryError};

/// What a successful build produced
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub entries: Vec<Entry>,
    pub output: PathBuf,
}

impl BuildReport {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Scan the flags directory, render the grid and write the page.
///
/// An unreadable flags directory renders the empty state. Only template and
/// output errors fail the build.
pub fn build(
    paths: &BuildPaths,
    options: RenderOptions,
    names: &OverrideTable,
) -> Result<BuildReport, GalleryError> {
    paths.validate()?;

    let entries = scan_or_empty(&paths.flags_dir, &paths.subdir, names);
    let fragment = render(&entries, options);

    materialize_file(&paths.template, &paths.output, &fragment, entries.len())?;

    Ok(BuildReport {
        entries,
        output: paths.output.clone(),
    })
}
