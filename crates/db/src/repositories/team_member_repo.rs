//! Repository for the `team_members` table.

use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, bio, image, email, linkedin_url, website_url, is_active, \
    display_order, created_at";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// Insert a new team member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, role, bio, image, email, linkedin_url, website_url,
                is_active, display_order)
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, ''), COALESCE($6, ''),
                COALESCE($7, ''), COALESCE($8, TRUE), COALESCE($9, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.image)
            .bind(&input.email)
            .bind(&input.linkedin_url)
            .bind(&input.website_url)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a team member by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List members ordered by display_order then name; inactive members only
    /// when requested.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM team_members
             WHERE (is_active OR $1)
             ORDER BY display_order, name"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a team member. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                image = COALESCE($5, image),
                email = COALESCE($6, email),
                linkedin_url = COALESCE($7, linkedin_url),
                website_url = COALESCE($8, website_url),
                is_active = COALESCE($9, is_active),
                display_order = COALESCE($10, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.image)
            .bind(&input.email)
            .bind(&input.linkedin_url)
            .bind(&input.website_url)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
