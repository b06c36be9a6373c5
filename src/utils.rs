use std::fs;
use std::path::Path;

/// Create an OSC8 file:// hyperlink for terminal output.
/// Falls back to the path as given if it can't be resolved.
pub fn osc8_file_link(path: &Path, text: &str) -> String {
    let abs_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!(
        "\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\",
        abs_path.display(),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc8_file_link_wraps_text() {
        let link = osc8_file_link(Path::new("does/not/exist.html"), "index.html");
        assert_eq!(
            link,
            "\x1b]8;;file://does/not/exist.html\x1b\\index.html\x1b]8;;\x1b\\"
        );
    }
}
