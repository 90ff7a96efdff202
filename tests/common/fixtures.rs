//! Content fixtures
//!
//! A small magazine: one category, one author, an open post and an
//! exclusive post whose body is longer than the preview.

use chrono::{TimeZone, Utc};
use jazz_chronicle::backend::repository::MemoryRepository;
use jazz_chronicle::shared::content::{
    Author, AuthorMetadata, Category, CategoryMetadata, Media, Post, PostMetadata,
};

pub const OPEN_SLUG: &str = "blue-train";
pub const EXCLUSIVE_SLUG: &str = "love-supreme-sessions";
pub const OPEN_BODY: &str = "Coltrane's only Blue Note date as a leader.";

/// Body of the exclusive post: 600 characters
pub fn exclusive_body() -> String {
    "x".repeat(600)
}

pub fn hard_bop() -> Category {
    Category {
        id: "cat-hard-bop".to_string(),
        slug: "hard-bop".to_string(),
        title: "Hard Bop".to_string(),
        metadata: CategoryMetadata {
            name: "Hard Bop".to_string(),
            description: Some("Bebop with gospel and blues".to_string()),
            color: Some("#1e40af".to_string()),
        },
    }
}

pub fn nat() -> Author {
    Author {
        id: "author-nat".to_string(),
        slug: "nat-hentoff".to_string(),
        title: "Nat Hentoff".to_string(),
        metadata: AuthorMetadata {
            name: "Nat Hentoff".to_string(),
            bio: Some("Critic".to_string()),
            photo: None,
            email: None,
            website: None,
            twitter: None,
            specialties: None,
        },
    }
}

fn post(slug: &str, title: &str, day: u32, body: String, exclusive: bool) -> Post {
    Post {
        id: format!("post-{}", slug),
        slug: slug.to_string(),
        title: title.to_string(),
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()),
        published_at: None,
        metadata: PostMetadata {
            content: body,
            excerpt: Some(format!("{} excerpt", title)),
            featured_image: Some(Media {
                url: format!("https://cdn.example/{}.jpg", slug),
                imgix_url: format!("https://imgix.example/{}.jpg", slug),
            }),
            author: Some(nat()),
            category: Some(hard_bop()),
            tags: Some("coltrane, 1957".to_string()),
            published_date: Some(format!("2024-05-{:02}", day)),
            exclusive,
        },
    }
}

/// Store seeded with the fixture magazine
pub fn seeded_repository() -> MemoryRepository {
    let repository = MemoryRepository::new();
    repository.insert_category(hard_bop());
    repository.insert_author(nat());
    repository.insert_post(post(OPEN_SLUG, "Blue Train", 1, OPEN_BODY.to_string(), false));
    repository.insert_post(post(
        EXCLUSIVE_SLUG,
        "A Love Supreme: The Sessions",
        2,
        exclusive_body(),
        true,
    ));
    repository
}
