//! Domain primitives shared across the Atelier backend crates.
//!
//! - [`error`] -- the domain error type consumed by the API layer.
//! - [`types`] -- id and timestamp aliases.
//! - [`roles`] -- well-known role name constants.
//! - [`slug`] -- URL-safe slug derivation for content entities.
//! - [`gallery`] -- gallery-slot aggregation for entities with image slots.
//! - [`collaboration`] -- collaboration request enums and validation.
//! - [`content`] -- project type enum validation.
//! - [`ordering`] -- whitelisted sort directives for list endpoints.

pub mod collaboration;
pub mod content;
pub mod error;
pub mod gallery;
pub mod ordering;
pub mod roles;
pub mod slug;
pub mod types;
