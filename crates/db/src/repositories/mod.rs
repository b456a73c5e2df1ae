//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_section_repo;
pub mod category_repo;
pub mod collaboration_repo;
pub mod hero_slide_repo;
pub mod news_article_repo;
pub mod project_repo;
pub mod session_repo;
pub mod site_settings_repo;
pub mod slogan_section_repo;
pub mod team_member_repo;
pub mod user_repo;
pub mod work_category_repo;
pub mod work_repo;

pub use about_section_repo::AboutSectionRepo;
pub use category_repo::CategoryRepo;
pub use collaboration_repo::CollaborationRepo;
pub use hero_slide_repo::HeroSlideRepo;
pub use news_article_repo::NewsArticleRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use site_settings_repo::SiteSettingsRepo;
pub use slogan_section_repo::SloganSectionRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
pub use work_category_repo::WorkCategoryRepo;
pub use work_repo::WorkRepo;
