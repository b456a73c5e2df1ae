//! Gallery-slot aggregation.
//!
//! Projects and works carry four optional gallery image slots (`image_1` ..
//! `image_4`). The API exposes them as a single ordered `gallery_images`
//! list: empty slots are skipped without reindexing the survivors.

/// Collect the non-empty image slots in slot order.
///
/// A slot counts as empty when it is `None` or contains only whitespace.
pub fn gallery_images(slots: [Option<&str>; 4]) -> Vec<String> {
    slots
        .iter()
        .filter_map(|slot| match slot {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            _ => None,
        })
        .collect()
}
