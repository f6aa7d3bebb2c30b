use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::{morning_of, Image};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: Image,
    pub author: &'static str,
    pub published_at: DateTime<Utc>,
    pub category: &'static str,
}

const PLACEHOLDER_URL: &str = "https://placehold.co/800x400";

static POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        BlogPost {
            id: "1",
            slug: "getting-started",
            title: "Getting Started",
            excerpt: "Learn how to set up...",
            image: Image {
                url: PLACEHOLDER_URL,
                alt_text: "Getting started",
            },
            author: "Team",
            published_at: morning_of(2024, 1, 15),
            category: "tutorials",
        },
        BlogPost {
            id: "2",
            slug: "product-updates",
            title: "Product Updates - Jan 2024",
            excerpt: "Latest features...",
            image: Image {
                url: PLACEHOLDER_URL,
                alt_text: "Updates",
            },
            author: "Team",
            published_at: morning_of(2024, 1, 10),
            category: "updates",
        },
        BlogPost {
            id: "3",
            slug: "api-integration",
            title: "API Integration Guide",
            excerpt: "Technical guide...",
            image: Image {
                url: PLACEHOLDER_URL,
                alt_text: "API",
            },
            author: "Engineering",
            published_at: morning_of(2024, 1, 5),
            category: "technical",
        },
    ]
});

/// All posts, newest first.
pub fn blog_posts() -> &'static [BlogPost] {
    &POSTS
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Page `page` (1-based) of `limit` posts. Pages past the end are empty.
pub fn page_of_posts(page: usize, limit: usize) -> &'static [BlogPost] {
    let start = page.saturating_sub(1).saturating_mul(limit);
    let posts = blog_posts();
    if start >= posts.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(posts.len());
    &posts[start..end]
}
