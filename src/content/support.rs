use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::morning_of;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportArticle {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub updated_at: DateTime<Utc>,
}

static ARTICLES: Lazy<Vec<SupportArticle>> = Lazy::new(|| {
    vec![
        SupportArticle {
            id: "1",
            slug: "reset-password",
            title: "How to Reset Your Password",
            excerpt: "Step-by-step guide...",
            category: "account",
            tags: &["password", "reset"],
            updated_at: morning_of(2024, 1, 15),
        },
        SupportArticle {
            id: "2",
            slug: "billing-faq",
            title: "Billing and Payments FAQ",
            excerpt: "Common questions...",
            category: "billing",
            tags: &["billing", "payment"],
            updated_at: morning_of(2024, 1, 10),
        },
        SupportArticle {
            id: "3",
            slug: "api-guide",
            title: "API Integration Guide",
            excerpt: "Technical guide...",
            category: "technical",
            tags: &["api", "integration"],
            updated_at: morning_of(2024, 1, 5),
        },
        SupportArticle {
            id: "4",
            slug: "troubleshooting",
            title: "Troubleshooting Common Errors",
            excerpt: "Solutions for errors...",
            category: "technical",
            tags: &["error", "debugging"],
            updated_at: morning_of(2024, 1, 1),
        },
    ]
});

pub fn support_articles() -> &'static [SupportArticle] {
    &ARTICLES
}

pub fn find_article(slug: &str) -> Option<&'static SupportArticle> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

/// Articles whose title or any tag contains `query` (case-insensitive),
/// restricted to `category` when given. Blank filters match everything.
pub fn search_articles(query: Option<&str>, category: Option<&str>) -> Vec<&'static SupportArticle> {
    let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());
    let category = category.filter(|c| !c.is_empty());

    ARTICLES
        .iter()
        .filter(|article| {
            query.as_deref().map_or(true, |q| {
                article.title.to_lowercase().contains(q)
                    || article.tags.iter().any(|tag| tag.contains(q))
            })
        })
        .filter(|article| category.map_or(true, |c| article.category == c))
        .collect()
}
