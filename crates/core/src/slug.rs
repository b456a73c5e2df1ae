//! URL-safe slug derivation for content entities.
//!
//! Categories, projects, news articles, and works all carry a unique `slug`
//! column. When a create payload omits the slug, it is derived from the
//! title/name field with [`slugify`]. Collisions are not auto-resolved: two
//! titles that normalize to the same slug hit the unique constraint, and the
//! caller must supply an explicit slug to disambiguate.

/// Normalize a title into a URL-safe slug.
///
/// Lowercases ASCII letters, keeps digits, and collapses every other run of
/// characters into a single `-`. Leading and trailing separators are trimmed.
///
/// # Examples
///
/// ```
/// use atelier_core::slug::slugify;
///
/// assert_eq!(slugify("The Kinsman Challenge"), "the-kinsman-challenge");
/// assert_eq!(slugify("  Omweso: Board & Strategy  "), "omweso-board-strategy");
/// assert_eq!(slugify("2024 Retrospective"), "2024-retrospective");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Resolve the slug for a create payload: use the explicit slug when present
/// and non-empty, otherwise derive one from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> String {
    match explicit {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => slugify(title),
    }
}
