//! Template materialization
//!
//! The template is only ever opened read-only. The output file is opened for
//! writing after the page has been fully rendered in memory, so a failed read
//! leaves any existing output untouched.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::types::GalleryError;

/// Opening marker of the comment replaced by the flag grid
pub const FLAGS_PLACEHOLDER: &str = "<!-- {{FLAGS_PLACEHOLDER}}";
/// Replaced everywhere with the number of flags
pub const COUNT_PLACEHOLDER: &str = "{{FLAG_COUNT}}";

const COMMENT_CLOSE: &str = "-->";
/// Characters the placeholder comment may not span
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Byte range of the first `<!-- {{FLAGS_PLACEHOLDER}} ... -->` comment.
/// The comment must close on the line it opens.
fn find_flags_placeholder(template: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = template[from..].find(FLAGS_PLACEHOLDER) {
        let start = from + offset;
        let body_start = start + FLAGS_PLACEHOLDER.len();
        let line = match template[body_start..].find(LINE_BREAKS) {
            Some(len) => &template[body_start..body_start + len],
            None => &template[body_start..],
        };
        if let Some(close) = line.find(COMMENT_CLOSE) {
            return Some((start, body_start + close + COMMENT_CLOSE.len()));
        }
        from = body_start;
    }
    None
}

/// Fill the template: the first flags comment gets the trimmed fragment,
/// every count token gets `count`.
pub fn materialize(template: &str, fragment: &str, count: usize) -> String {
    let html = match find_flags_placeholder(template) {
        Some((start, end)) => {
            let mut html = String::with_capacity(template.len() + fragment.len());
            html.push_str(&template[..start]);
            html.push_str(fragment.trim());
            html.push_str(&template[end..]);
            html
        }
        None => template.to_string(),
    };

    html.replace(COUNT_PLACEHOLDER, &count.to_string())
}

/// Read the template through a read-only handle
pub fn read_template(path: &Path) -> Result<String, GalleryError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GalleryError::TemplateMissing(path.to_path_buf()),
        _ => GalleryError::TemplateRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| GalleryError::TemplateRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(content)
}

/// Write (create or truncate) the generated page
pub fn write_output(path: &Path, html: &str) -> Result<(), GalleryError> {
    let write_failure = |source: io::Error| GalleryError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(write_failure)?;
    file.write_all(html.as_bytes()).map_err(write_failure)?;
    file.flush().map_err(write_failure)
}

/// Read `template_path`, fill it in and write the result to `output_path`
pub fn materialize_file(
    template_path: &Path,
    output_path: &Path,
    fragment: &str,
    count: usize,
) -> Result<(), GalleryError> {
    let template = read_template(template_path)?;
    let html = materialize(&template, fragment, count);
    write_output(output_path, &html)
}
