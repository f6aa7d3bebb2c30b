//! Static editorial content served alongside the catalog.
//!
//! Blog posts and support articles are compiled into the binary; there is
//! no persistence layer behind them.

mod blog;
mod support;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

pub use blog::{blog_posts, find_post, page_of_posts, BlogPost};
pub use support::{find_article, search_articles, support_articles, SupportArticle};

/// An image reference in the Storefront API's `{url, altText}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: &'static str,
    pub alt_text: &'static str,
}

/// 10:00 UTC on the given day.
fn morning_of(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .unwrap_or_default()
}
