use std::sync::Arc;

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::products::{Connection, ImageRef};
use super::{decode, numeric_param, ApiError, AppState, QueryParams, Success};
use crate::queries::SEARCH_QUERY;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;
const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Deserialize)]
struct SearchNode {
    id: String,
    handle: String,
    title: String,
    images: Connection<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    products: Connection<SearchNode>,
}

#[derive(Debug, Serialize)]
struct Hit {
    #[serde(rename = "type")]
    kind: &'static str,
    id: String,
    title: String,
    slug: String,
    image: Option<ImageRef>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResults {
    hits: Vec<Hit>,
    total: usize,
}

/// `GET /api/search?q=`
pub(super) async fn search(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Result<Success<SearchResults>, ApiError> {
    let params = QueryParams::from(query);
    let q = params.get("q").unwrap_or_default();
    if q.chars().count() < MIN_QUERY_CHARS {
        return Err(ApiError::bad_request("INVALID_QUERY", "Min 2 chars"));
    }
    let limit = numeric_param(params.get("limit"), DEFAULT_LIMIT, MAX_LIMIT);

    let data = state
        .storefront
        .query(SEARCH_QUERY, Some(json!({ "query": q, "first": limit })), None)
        .await
        .and_then(decode::<SearchData>)
        .map_err(ApiError::storefront("SEARCH_ERROR"))?;

    let hits: Vec<Hit> = data
        .products
        .edges
        .into_iter()
        .map(|edge| Hit {
            kind: "product",
            id: edge.node.id,
            title: edge.node.title,
            slug: edge.node.handle,
            image: edge.node.images.into_first(),
        })
        .collect();
    let total = hits.len();

    Ok(Success(SearchResults { hits, total }))
}
