// src/core/sanitize.rs

use url::Url;

/// Replace each space, forward slash and hyphen with an underscore.
/// The original display name is kept for the manifest; this only feeds the
/// filename.
pub fn safe_name(state_name: &str) -> String {
    state_name
        .replace(' ', "_")
        .replace('/', "_")
        .replace('-', "_")
}

/// Extension of the URL's path, dot included (".svg"), or "" when the last
/// path segment has none. Dots in directories don't count, nor does a leading
/// dot in the segment itself.
pub fn extension_of(image_url: &str) -> String {
    let path = match Url::parse(image_url) {
        Ok(u) => u.path().to_string(),
        Err(_) => image_url.to_string(),
    };
    let segment = path.rsplit('/').next().unwrap_or("");
    match segment.rfind('.') {
        Some(i) if i > 0 => segment[i..].to_string(),
        _ => String::new(),
    }
}

/// Filename for one entry: substitutions, then the extension, then
/// lower-casing, then transliteration. The order is fixed so an upper-case
/// accented name comes out the same on every run.
pub fn derive_filename(state_name: &str, image_url: &str) -> String {
    derive_filename_with(state_name, image_url, deunicode::deunicode)
}

/// Same pipeline with the transliteration step injected.
pub fn derive_filename_with(
    state_name: &str,
    image_url: &str,
    translit: fn(&str) -> String,
) -> String {
    let raw = format!("{}{}", safe_name(state_name), extension_of(image_url));
    translit(&raw.to_lowercase())
}
