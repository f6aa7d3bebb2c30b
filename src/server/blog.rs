use axum::extract::{Path, Query};
use serde::Serialize;

use super::{numeric_param, ApiError, QueryParams, Success};
use crate::content::{blog_posts, find_post, page_of_posts, BlogPost};

const DEFAULT_LIMIT: usize = 12;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Serialize)]
struct Pagination {
    page: usize,
    limit: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct PostList {
    items: &'static [BlogPost],
    pagination: Pagination,
}

/// `GET /api/blog`
pub(super) async fn list(query: Query<Vec<(String, String)>>) -> Success<PostList> {
    let params = QueryParams::from(query);
    let limit = numeric_param(params.get("limit"), DEFAULT_LIMIT, MAX_LIMIT);
    let page = numeric_param(params.get("page"), 1, usize::MAX);

    Success(PostList {
        items: page_of_posts(page, limit),
        pagination: Pagination {
            page,
            limit,
            total: blog_posts().len(),
        },
    })
}

/// `GET /api/blog/:slug`
pub(super) async fn detail(
    Path(slug): Path<String>,
) -> Result<Success<&'static BlogPost>, ApiError> {
    find_post(&slug).map(Success).ok_or(ApiError::NotFound {
        message: "Post not found",
    })
}
