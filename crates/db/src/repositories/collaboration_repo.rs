//! Repository for the `collaborations` table.

use atelier_core::collaboration::{normalize_email, STATUS_NEW};
use atelier_core::ordering::Ordering;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::collaboration::{Collaboration, CollaborationFilter, CreateCollaboration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, project_type, message, status, admin_notes, reviewed, submitted_at";

/// Provides CRUD and state-transition operations for collaboration requests.
pub struct CollaborationRepo;

impl CollaborationRepo {
    /// Columns clients may sort the list endpoint by.
    pub const ORDERABLE: &'static [&'static str] = &["submitted_at", "status"];

    /// Insert a new request, returning the created row.
    ///
    /// The email is lower-cased on the way in; status, admin notes, and the
    /// reviewed flag are server-assigned and never taken from the payload.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollaboration,
    ) -> Result<Collaboration, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborations (name, email, project_type, message, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(&input.name)
            .bind(normalize_email(&input.email))
            .bind(&input.project_type)
            .bind(&input.message)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Collaboration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collaborations WHERE id = $1");
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests with optional filters, newest submission first unless
    /// the caller requests another sortable column.
    pub async fn list(
        pool: &PgPool,
        filter: &CollaborationFilter,
        order: Option<Ordering>,
    ) -> Result<Vec<Collaboration>, sqlx::Error> {
        let order_by = match order {
            Some(o) => format!("{} {}", o.column, o.direction()),
            None => "submitted_at DESC".to_string(),
        };
        let query = format!(
            "SELECT {COLUMNS} FROM collaborations
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::BOOLEAN IS NULL OR reviewed = $2)
               AND ($3::TEXT IS NULL OR project_type = $3)
             ORDER BY {order_by}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(&filter.status)
            .bind(filter.reviewed)
            .bind(&filter.project_type)
            .fetch_all(pool)
            .await
    }

    /// Mark a request as reviewed. Returns the updated row, or `None` if no
    /// row with the given id exists.
    pub async fn mark_reviewed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query = format!(
            "UPDATE collaborations SET reviewed = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set the status of a request. The caller is responsible for validating
    /// the status value against the declared enum first.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query =
            format!("UPDATE collaborations SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Replace the internal admin notes. Returns the updated row.
    pub async fn set_admin_notes(
        pool: &PgPool,
        id: DbId,
        notes: &str,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query =
            format!("UPDATE collaborations SET admin_notes = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collaborations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
