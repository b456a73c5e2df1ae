//! HTTP handler functions, one module per resource.

pub mod about;
pub mod auth;
pub mod category;
pub mod collaboration;
pub mod hero_slide;
pub mod media;
pub mod news;
pub mod project;
pub mod settings;
pub mod slogan;
pub mod team_member;
pub mod work;
pub mod work_category;
