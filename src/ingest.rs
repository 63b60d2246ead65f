use crate::error::{IgError, Result};
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Reads a selected file in full and decodes it as UTF-8 text.
///
/// Only paths ending in `.json` are accepted. A leading byte order mark is
/// dropped, as text decoders in browsers do.
pub fn read_text(path: &Path) -> Result<String> {
    if !is_json_file(path) {
        return Err(IgError::NotJson(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

pub fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
