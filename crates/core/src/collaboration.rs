//! Collaboration request enums and validation.
//!
//! Collaboration intake is the one fully public write surface, so its
//! validation lives here rather than in the API layer: the rules hold no
//! matter which surface creates a row.

use crate::error::CoreError;

/// Valid collaboration status values, in lifecycle order.
pub const STATUS_VALUES: &[&str] = &["new", "in_review", "contacted", "archived"];

/// Status assigned to every newly submitted request.
pub const STATUS_NEW: &str = "new";

/// Valid project-type values for a collaboration request.
pub const PROJECT_TYPES: &[&str] = &[
    "architecture",
    "design",
    "game",
    "research",
    "exhibition",
    "other",
];

/// Validate that `status` is a member of the declared status enum.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if STATUS_VALUES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {STATUS_VALUES:?}"
        )))
    }
}

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

/// Normalize an inbound email address for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
