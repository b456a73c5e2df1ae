//! Well-known role name constants.
//!
//! These must match the `ck_users_role` CHECK constraint on the `users`
//! table (`20260301000001_create_users.sql`).

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// Whether a role name grants staff-level (write) access to content.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_editor_are_staff() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_EDITOR));
    }

    #[test]
    fn unknown_role_is_not_staff() {
        assert!(!is_staff("viewer"));
        assert!(!is_staff(""));
    }
}
