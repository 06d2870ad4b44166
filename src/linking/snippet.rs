//! Context-snippet extraction around a match.

/// The substring spanning `radius` characters before and after the match,
/// clamped to the text bounds. Window edges land on byte offsets, so they
/// are snapped outward to the nearest char boundary rather than splitting a
/// multi-byte character.
pub fn around(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut lo = start.saturating_sub(radius);
    let mut hi = end.saturating_add(radius).min(text.len());

    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }

    text[lo..hi].to_string()
}
