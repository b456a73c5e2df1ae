//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use atelier_core::error::CoreError;
use atelier_core::ordering::{parse_ordering, Ordering};
use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive` flag.
///
/// Used by hero slides, work categories, and team members.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// `?type=` parameter for the project by-type action. Optional at the serde
/// level so the handler can reject its absence with a 400 instead of a
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct TypeParams {
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

/// `?category=` parameter for the work by-category action.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// `?count=` parameter for the news latest action.
#[derive(Debug, Deserialize)]
pub struct CountParams {
    pub count: Option<i64>,
}

/// `?search=` parameter for list endpoints with text search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// `?ordering=` parameter for list endpoints with client-controlled sorting.
///
/// A bare column name sorts ascending, a `-` prefix descending
/// (`?ordering=-created_at`). Each resource accepts its own column set.
#[derive(Debug, Deserialize)]
pub struct OrderingParams {
    pub ordering: Option<String>,
}

impl OrderingParams {
    /// Validate the raw parameter against a resource's sortable columns.
    ///
    /// `None` when the parameter is absent; a validation error when it names
    /// a column outside `allowed`.
    pub fn resolve(&self, allowed: &[&'static str]) -> Result<Option<Ordering>, CoreError> {
        self.ordering
            .as_deref()
            .map(|raw| parse_ordering(raw, allowed))
            .transpose()
    }
}
