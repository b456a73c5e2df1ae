//! Portfolio content enums.

use crate::error::CoreError;

/// Valid project-type values for a portfolio project.
pub const PROJECT_TYPES: &[&str] = &["architecture", "design", "game", "art", "speculative"];

/// Maximum number of rows returned by the news `latest` action.
pub const MAX_LATEST_COUNT: i64 = 20;

/// Default number of rows returned by the news `latest` action.
pub const DEFAULT_LATEST_COUNT: i64 = 3;

/// Number of sibling rows surfaced as `related_works` on a work detail.
pub const RELATED_WORKS_LIMIT: i64 = 6;

/// Validate that `project_type` is a member of the declared enum.
pub fn validate_project_type(project_type: &str) -> Result<(), CoreError> {
    if PROJECT_TYPES.contains(&project_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project_type '{project_type}'. Must be one of: {PROJECT_TYPES:?}"
        )))
    }
}

/// Clamp a requested `latest` count into the accepted range.
pub fn clamp_latest_count(count: Option<i64>) -> i64 {
    count
        .unwrap_or(DEFAULT_LATEST_COUNT)
        .clamp(1, MAX_LATEST_COUNT)
}
