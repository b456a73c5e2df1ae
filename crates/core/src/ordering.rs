//! Client-requested ordering for list endpoints.
//!
//! List endpoints accept an `ordering` query parameter naming one of a fixed
//! set of columns for that resource, with a `-` prefix for descending order
//! (`?ordering=title`, `?ordering=-created_at`). Each repository declares its
//! sortable columns; anything outside that set is a validation error, never
//! interpolated into SQL.

use crate::error::CoreError;

/// A validated sort directive: a whitelisted column plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    /// Column name, guaranteed to come from the whitelist it was parsed with.
    pub column: &'static str,
    pub descending: bool,
}

impl Ordering {
    /// SQL direction keyword for this ordering.
    pub fn direction(&self) -> &'static str {
        if self.descending {
            "DESC"
        } else {
            "ASC"
        }
    }
}

/// Parse a raw `ordering` parameter against a column whitelist.
///
/// A leading `-` selects descending order. Columns not present in `allowed`
/// are rejected.
pub fn parse_ordering(raw: &str, allowed: &[&'static str]) -> Result<Ordering, CoreError> {
    let (descending, field) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    allowed
        .iter()
        .find(|column| **column == field)
        .map(|column| Ordering {
            column: *column,
            descending,
        })
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Cannot order by '{field}'. Allowed fields: {}",
                allowed.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["name", "created_at"];

    #[test]
    fn ascending_by_default() {
        let order = parse_ordering("name", ALLOWED).unwrap();
        assert_eq!(order.column, "name");
        assert!(!order.descending);
        assert_eq!(order.direction(), "ASC");
    }

    #[test]
    fn minus_prefix_means_descending() {
        let order = parse_ordering("-created_at", ALLOWED).unwrap();
        assert_eq!(order.column, "created_at");
        assert!(order.descending);
        assert_eq!(order.direction(), "DESC");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = parse_ordering("password_hash", ALLOWED).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn bare_minus_is_rejected() {
        assert!(parse_ordering("-", ALLOWED).is_err());
        assert!(parse_ordering("", ALLOWED).is_err());
    }
}
