//! Integration tests for the singleton configuration repositories.
//!
//! Each repository's `load` lazily inserts the single row on first access;
//! repeated loads and updates must never produce a second row.

use sqlx::PgPool;
use atelier_db::models::about_section::UpdateAboutSection;
use atelier_db::models::site_settings::UpdateSiteSettings;
use atelier_db::models::slogan_section::UpdateSloganSection;
use atelier_db::repositories::{AboutSectionRepo, SiteSettingsRepo, SloganSectionRepo};

async fn row_count(pool: &PgPool, table: &str) -> i64 {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_site_settings_load_creates_single_row(pool: PgPool) {
    assert_eq!(row_count(&pool, "site_settings").await, 0);

    let settings = SiteSettingsRepo::load(&pool).await.unwrap();
    assert_eq!(settings.id, 1);
    assert_eq!(settings.site_title, "Atelier Spaces");
    assert_eq!(row_count(&pool, "site_settings").await, 1);

    // Repeated load reuses the same row.
    let again = SiteSettingsRepo::load(&pool).await.unwrap();
    assert_eq!(again.id, 1);
    assert_eq!(row_count(&pool, "site_settings").await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_site_settings_partial_update(pool: PgPool) {
    let update = UpdateSiteSettings {
        tagline: Some("Practice-based research".to_string()),
        instagram_url: Some("https://instagram.com/atelier".to_string()),
        ..Default::default()
    };
    // Update works even when the row has never been loaded.
    let updated = SiteSettingsRepo::update(&pool, &update).await.unwrap();
    assert_eq!(updated.tagline, "Practice-based research");
    assert_eq!(updated.instagram_url, "https://instagram.com/atelier");
    // Defaults survive the partial update.
    assert_eq!(updated.site_title, "Atelier Spaces");
    assert_eq!(row_count(&pool, "site_settings").await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_about_section_load_and_update(pool: PgPool) {
    let about = AboutSectionRepo::load(&pool).await.unwrap();
    assert_eq!(about.id, 1);
    assert_eq!(about.title, "About Us");
    assert_eq!(about.team_image, None);

    let update = UpdateAboutSection {
        content: Some("Founded in 2018.".to_string()),
        team_image: Some("team.jpg".to_string()),
        ..Default::default()
    };
    let updated = AboutSectionRepo::update(&pool, &update).await.unwrap();
    assert_eq!(updated.content, "Founded in 2018.");
    assert_eq!(updated.team_image.as_deref(), Some("team.jpg"));
    assert_eq!(updated.title, "About Us");
    assert_eq!(row_count(&pool, "about_section").await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_slogan_section_load_and_update(pool: PgPool) {
    let slogan = SloganSectionRepo::load(&pool).await.unwrap();
    assert_eq!(slogan.id, 1);
    assert_eq!(slogan.text, "");
    assert!(slogan.is_active);

    let update = UpdateSloganSection {
        text: Some("Space as an argument".to_string()),
        is_active: Some(false),
    };
    let updated = SloganSectionRepo::update(&pool, &update).await.unwrap();
    assert_eq!(updated.text, "Space as an argument");
    assert!(!updated.is_active);
    assert_eq!(row_count(&pool, "slogan_section").await, 1);
}
