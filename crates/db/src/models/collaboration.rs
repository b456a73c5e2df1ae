//! Collaboration request entity model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A collaboration request row from the `collaborations` table.
///
/// `status`, `admin_notes`, and `reviewed` are server-managed: the public
/// create path never reads them from the payload.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaboration {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub status: String,
    pub admin_notes: String,
    pub reviewed: bool,
    pub submitted_at: Timestamp,
}

/// DTO for the public contact-form submission.
///
/// Any extra fields in the payload (status, reviewed, admin_notes, ...) are
/// dropped by serde; the server assigns those columns itself.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollaboration {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub project_type: String,
    #[validate(length(min = 20, message = "Message must be at least 20 characters long"))]
    pub message: String,
}

/// Optional filters accepted by the admin list endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CollaborationFilter {
    pub status: Option<String>,
    pub reviewed: Option<bool>,
    pub project_type: Option<String>,
}
