use axum::extract::{Path, Query};
use serde::Serialize;

use super::{numeric_param, ApiError, QueryParams, Success};
use crate::content::{find_article, search_articles, SupportArticle};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Serialize)]
pub(super) struct ArticleList {
    items: Vec<&'static SupportArticle>,
    total: usize,
}

/// `GET /api/support`
pub(super) async fn list(query: Query<Vec<(String, String)>>) -> Success<ArticleList> {
    let params = QueryParams::from(query);
    let limit = numeric_param(params.get("limit"), DEFAULT_LIMIT, MAX_LIMIT);
    let mut items = search_articles(params.get("q"), params.get("category"));
    let total = items.len();
    items.truncate(limit);

    Success(ArticleList { items, total })
}

/// `GET /api/support/:slug`
pub(super) async fn detail(
    Path(slug): Path<String>,
) -> Result<Success<&'static SupportArticle>, ApiError> {
    find_article(&slug).map(Success).ok_or(ApiError::NotFound {
        message: "Article not found",
    })
}
