//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! List endpoints use the reduced `*Summary` structs; detail endpoints use
//! the full entity plus assembled `*Detail` response types.

pub mod about_section;
pub mod category;
pub mod collaboration;
pub mod hero_slide;
pub mod news_article;
pub mod project;
pub mod session;
pub mod site_settings;
pub mod slogan_section;
pub mod team_member;
pub mod user;
pub mod work;
pub mod work_category;
