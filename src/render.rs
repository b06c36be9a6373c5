use std::borrow::Cow;

use crate::types::Entry;

/// Shown in place of the grid when the flags directory has no images
pub const EMPTY_STATE: &str = r#"
              <div class="flag-item">
                <span class="flag-placeholder">🏳️</span>
                <span class="flag-name">No flags yet</span>
              </div>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Escape names and paths before interpolating them into markup
    pub escape: bool,
}

// HTML generation helpers
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Markup for a single flag tile
fn flag_item_html(entry: &Entry, options: RenderOptions) -> String {
    let (path, name): (Cow<'_, str>, Cow<'_, str>) = if options.escape {
        (
            html_escape(&entry.relative_path).into(),
            html_escape(&entry.display_name).into(),
        )
    } else {
        (
            entry.relative_path.as_str().into(),
            entry.display_name.as_str().into(),
        )
    };

    format!(
        r#"
              <div class="flag-item" onclick="openFlagModal('{path}', '{name}')">
                <img src="{path}" alt="{name}">
                <span class="flag-name">{name}</span>
              </div>"#
    )
}

/// Concatenated tiles for `entries` in the order given, or [`EMPTY_STATE`]
pub fn render(entries: &[Entry], options: RenderOptions) -> String {
    if entries.is_empty() {
        return EMPTY_STATE.to_string();
    }

    entries
        .iter()
        .map(|entry| flag_item_html(entry, options))
        .collect()
}
