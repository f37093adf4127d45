//! Shop identifier derivation and validation.
//!
//! Identifiers name a directory under `shops/` and appear in URLs, so they
//! are restricted to lowercase ASCII letters, digits and single dashes.

/// Base used when a name has no transliterable characters
const FALLBACK_BASE: &str = "shop";

/// Hex chars of the name digest appended to derived identifiers
const DIGEST_LEN: usize = 6;

/// Derive an identifier from a shop name.
///
/// The name is transliterated to ASCII, lowercased and every run of
/// non-alphanumeric characters collapses to one `-`. A short digest of the
/// original name is appended so distinct names with the same transliteration
/// stay apart.
///
/// | name | result |
/// |------|--------|
/// | `Morning Café` | `morning-cafe-xxxxxx` |
/// | `!!!` | `shop-xxxxxx` |
pub fn slugify(name: &str) -> String {
    let ascii = deunicode::deunicode(name).to_ascii_lowercase();
    let base = collapse_dashes(&ascii);
    let base = if base.is_empty() { FALLBACK_BASE } else { &base };

    format!("{base}-{}", digest(name))
}

/// Check that `id` is usable as a path segment and URL component.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Replace non-alphanumeric runs with a single dash and trim the ends.
fn collapse_dashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// First `DIGEST_LEN` hex chars of the blake3 hash of `name`.
fn digest(name: &str) -> String {
    let hash = blake3::hash(name.as_bytes());
    let mut hex = hex::encode(&hash.as_bytes()[..DIGEST_LEN.div_ceil(2)]);
    hex.truncate(DIGEST_LEN);
    hex
}
