//! Integration tests for the core content repositories:
//! - Category CRUD, auto-slugging, and project counts
//! - Project CRUD, filtering, and category SET NULL on delete
//! - News article visibility (published vs staff) and author cascade

use atelier_core::ordering::parse_ordering;
use sqlx::PgPool;
use atelier_db::models::category::{CreateCategory, UpdateCategory};
use atelier_db::models::news_article::{CreateNewsArticle, UpdateNewsArticle};
use atelier_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use atelier_db::models::user::CreateUser;
use atelier_db::repositories::{CategoryRepo, NewsArticleRepo, ProjectRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        slug: None,
        description: None,
    }
}

fn new_project(title: &str, project_type: &str, category_id: Option<i64>) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: None,
        description: None,
        full_content: None,
        project_type: project_type.to_string(),
        category_id,
        featured_image: None,
        image_1: None,
        image_2: None,
        image_3: None,
        image_4: None,
        video_url: None,
        featured: None,
        display_order: None,
    }
}

fn new_article(title: &str, published: bool) -> CreateNewsArticle {
    CreateNewsArticle {
        title: title.to_string(),
        slug: None,
        excerpt: None,
        content: None,
        featured_image: None,
        published: Some(published),
        publish_date: None,
    }
}

async fn seed_author(pool: &PgPool, username: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "x".to_string(),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_auto_slug(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category("Interior Design"))
        .await
        .unwrap();
    assert_eq!(cat.slug, "interior-design");
    assert_eq!(cat.description, "");

    let found = CategoryRepo::find_by_slug(&pool, "interior-design")
        .await
        .unwrap();
    assert_eq!(found.map(|c| c.id), Some(cat.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_explicit_slug_wins(pool: PgPool) {
    let input = CreateCategory {
        name: "Urbanism".to_string(),
        slug: Some("city-scale".to_string()),
        description: Some("Large scale work".to_string()),
    };
    let cat = CategoryRepo::create(&pool, &input).await.unwrap();
    assert_eq!(cat.slug, "city-scale");
    assert_eq!(cat.description, "Large scale work");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_category_slug_is_unique_violation(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Exhibitions"))
        .await
        .unwrap();

    // Different name, same derived slug via explicit override.
    let dup = CreateCategory {
        name: "Exhibitions 2".to_string(),
        slug: Some("exhibitions".to_string()),
        description: None,
    };
    let err = CategoryRepo::create(&pool, &dup).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_categories_slug"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_project_count(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category("Research"))
        .await
        .unwrap();
    for title in ["Alpha", "Beta", "Gamma"] {
        ProjectRepo::create(&pool, &new_project(title, "architecture", Some(cat.id)))
            .await
            .unwrap();
    }

    let with_count = CategoryRepo::find_with_count(&pool, "research")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_count.project_count, 3);

    let all = CategoryRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].project_count, 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_update_and_delete(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category("Old Name"))
        .await
        .unwrap();

    let update = UpdateCategory {
        name: Some("New Name".to_string()),
        slug: None,
        description: Some("Renamed".to_string()),
    };
    let updated = CategoryRepo::update(&pool, &cat.slug, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.description, "Renamed");
    // Slug is stable unless explicitly changed.
    assert_eq!(updated.slug, "old-name");

    assert!(CategoryRepo::delete(&pool, "old-name").await.unwrap());
    assert!(!CategoryRepo::delete(&pool, "old-name").await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_delete_nulls_project_category(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category("Temporary"))
        .await
        .unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Orphan", "design", Some(cat.id)))
        .await
        .unwrap();
    assert_eq!(project.category_id, Some(cat.id));

    CategoryRepo::delete(&pool, "temporary").await.unwrap();

    let reloaded = ProjectRepo::find_by_slug(&pool, "orphan")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.category_id, None);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_project_create_defaults(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Blank Canvas", "art", None))
        .await
        .unwrap();
    assert_eq!(project.slug, "blank-canvas");
    assert_eq!(project.description, "");
    assert_eq!(project.full_content, "");
    assert_eq!(project.video_url, "");
    assert!(!project.featured);
    assert_eq!(project.display_order, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_project_filters(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &new_category("Filters"))
        .await
        .unwrap();

    let mut featured = new_project("Glass Pavilion", "architecture", Some(cat.id));
    featured.featured = Some(true);
    ProjectRepo::create(&pool, &featured).await.unwrap();

    let mut described = new_project("Pixel Garden", "game", None);
    described.description = Some("A playable landscape study".to_string());
    ProjectRepo::create(&pool, &described).await.unwrap();

    // Type filter
    let games = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            project_type: Some("game".to_string()),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].slug, "pixel-garden");

    // Featured filter
    let featured_only = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            featured: Some(true),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();
    assert_eq!(featured_only.len(), 1);
    assert_eq!(featured_only[0].slug, "glass-pavilion");

    // Search is case-insensitive and matches descriptions.
    let hits = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            search: Some("PLAYABLE".to_string()),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "pixel-garden");

    // No filter returns everything.
    let all = ProjectRepo::list(&pool, &ProjectFilter::default(), None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_project_list_client_ordering(pool: PgPool) {
    let mut first = new_project("Atrium Study", "design", None);
    first.display_order = Some(5);
    ProjectRepo::create(&pool, &first).await.unwrap();
    let mut second = new_project("Zinc Facade", "design", None);
    second.display_order = Some(1);
    ProjectRepo::create(&pool, &second).await.unwrap();

    // Default order follows display_order.
    let by_display = ProjectRepo::list(&pool, &ProjectFilter::default(), None)
        .await
        .unwrap();
    assert_eq!(by_display[0].slug, "zinc-facade");

    let by_title = ProjectRepo::list(
        &pool,
        &ProjectFilter::default(),
        Some(parse_ordering("title", ProjectRepo::ORDERABLE).unwrap()),
    )
    .await
    .unwrap();
    assert_eq!(by_title[0].slug, "atrium-study");

    let by_title_desc = ProjectRepo::list(
        &pool,
        &ProjectFilter::default(),
        Some(parse_ordering("-title", ProjectRepo::ORDERABLE).unwrap()),
    )
    .await
    .unwrap();
    assert_eq!(by_title_desc[0].slug, "zinc-facade");

    // Columns outside the whitelist never reach the query layer.
    assert!(parse_ordering("password_hash", ProjectRepo::ORDERABLE).is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_project_list_by_type_and_featured(pool: PgPool) {
    let mut a = new_project("Spec House", "speculative", None);
    a.featured = Some(true);
    ProjectRepo::create(&pool, &a).await.unwrap();
    ProjectRepo::create(&pool, &new_project("Print Series", "art", None))
        .await
        .unwrap();

    let speculative = ProjectRepo::list_by_type(&pool, "speculative").await.unwrap();
    assert_eq!(speculative.len(), 1);

    let featured = ProjectRepo::list_featured(&pool).await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "spec-house");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_project_partial_update(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Draft", "design", None))
        .await
        .unwrap();

    let update = UpdateProject {
        description: Some("Now with words".to_string()),
        featured: Some(true),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, &project.slug, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "Now with words");
    assert!(updated.featured);
    // Untouched fields survive the COALESCE update.
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.project_type, "design");

    let missing = ProjectRepo::update(&pool, "no-such-slug", &update).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// News articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_news_visibility_split(pool: PgPool) {
    let author = seed_author(&pool, "writer").await;

    NewsArticleRepo::create(&pool, author, &new_article("Published Piece", true))
        .await
        .unwrap();
    NewsArticleRepo::create(&pool, author, &new_article("Secret Draft", false))
        .await
        .unwrap();

    let public = NewsArticleRepo::list(&pool, false, None, None).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].slug, "published-piece");

    let staff = NewsArticleRepo::list(&pool, true, None, None).await.unwrap();
    assert_eq!(staff.len(), 2);

    // Drafts are invisible to anonymous lookups but visible to staff.
    assert!(NewsArticleRepo::find_by_slug(&pool, "secret-draft", false)
        .await
        .unwrap()
        .is_none());
    assert!(NewsArticleRepo::find_by_slug(&pool, "secret-draft", true)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_news_latest_limit(pool: PgPool) {
    let author = seed_author(&pool, "prolific").await;
    for i in 0..5 {
        NewsArticleRepo::create(&pool, author, &new_article(&format!("Post {i}"), true))
            .await
            .unwrap();
    }

    let latest = NewsArticleRepo::latest(&pool, false, 3).await.unwrap();
    assert_eq!(latest.len(), 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_news_author_name_and_search(pool: PgPool) {
    let author = seed_author(&pool, "jordan").await;
    let article = NewsArticleRepo::create(&pool, author, &new_article("Studio Expansion", true))
        .await
        .unwrap();

    let name = NewsArticleRepo::author_name(&pool, article.author_id)
        .await
        .unwrap();
    assert_eq!(name, "jordan");

    let listed = NewsArticleRepo::list(&pool, false, None, None).await.unwrap();
    assert_eq!(listed[0].author_name, "jordan");

    let hits = NewsArticleRepo::list(&pool, false, Some("expansion"), None).await.unwrap();
    assert_eq!(hits.len(), 1);
    let misses = NewsArticleRepo::list(&pool, false, Some("contraction"), None).await.unwrap();
    assert!(misses.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_news_update_and_delete(pool: PgPool) {
    let author = seed_author(&pool, "editor").await;
    let article = NewsArticleRepo::create(&pool, author, &new_article("Tweak Me", false))
        .await
        .unwrap();

    let update = UpdateNewsArticle {
        published: Some(true),
        excerpt: Some("Short take".to_string()),
        ..Default::default()
    };
    let updated = NewsArticleRepo::update(&pool, &article.slug, &update)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.published);
    assert_eq!(updated.excerpt, "Short take");

    assert!(NewsArticleRepo::delete(&pool, "tweak-me").await.unwrap());
    assert!(!NewsArticleRepo::delete(&pool, "tweak-me").await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_news_author_cascade(pool: PgPool) {
    let author = seed_author(&pool, "departing").await;
    NewsArticleRepo::create(&pool, author, &new_article("Goodbye", true))
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(author)
        .execute(&pool)
        .await
        .unwrap();

    let remaining = NewsArticleRepo::list(&pool, true, None, None).await.unwrap();
    assert!(remaining.is_empty());
}
