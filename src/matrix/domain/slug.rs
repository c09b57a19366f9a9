//! URL-safe tokens derived from matrix names.

/// Maps a matrix name to a lowercase, hyphen-separated routing token.
///
/// Every run of characters outside `[a-z0-9]` (after lowercasing) collapses
/// to one hyphen, and the result never starts or ends with a hyphen. Two
/// different names can map to the same slug.
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
