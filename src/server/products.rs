use std::sync::Arc;

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{decode, numeric_param, ApiError, AppState, QueryParams, Success};
use crate::queries::{PRODUCTS_QUERY, PRODUCT_BY_HANDLE_QUERY};

const DEFAULT_LIMIT: usize = 24;
const MAX_LIMIT: usize = 100;
const DEFAULT_SORT: &str = "CREATED_AT";

#[derive(Debug, Deserialize)]
pub(super) struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Edge<T> {
    pub node: T,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImageRef {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceRange {
    pub min_variant_price: Money,
}

impl Connection<ImageRef> {
    /// The first image, if the product has any.
    pub fn into_first(self) -> Option<ImageRef> {
        self.edges.into_iter().next().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductNode {
    id: String,
    handle: String,
    title: String,
    price_range: PriceRange,
    images: Connection<ImageRef>,
    available_for_sale: bool,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Connection<ProductNode>,
}

#[derive(Debug, Serialize)]
struct ProductSummary {
    id: String,
    handle: String,
    title: String,
    price: Money,
    image: Option<ImageRef>,
    available: bool,
}

impl From<ProductNode> for ProductSummary {
    fn from(node: ProductNode) -> Self {
        Self {
            id: node.id,
            handle: node.handle,
            title: node.title,
            price: node.price_range.min_variant_price,
            image: node.images.into_first(),
            available: node.available_for_sale,
        }
    }
}

#[derive(Debug, Serialize)]
struct Pagination {
    page: usize,
    limit: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductList {
    items: Vec<ProductSummary>,
    pagination: Pagination,
}

/// `GET /api/products`
pub(super) async fn list(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Result<Success<ProductList>, ApiError> {
    let params = QueryParams::from(query);
    let limit = numeric_param(params.get("limit"), DEFAULT_LIMIT, MAX_LIMIT);
    let sort = params
        .get("sort")
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SORT)
        .to_string();

    let mut variables = Map::new();
    variables.insert("first".to_string(), limit.into());
    if let Some(q) = params.get("q").filter(|q| !q.is_empty()) {
        variables.insert("query".to_string(), q.into());
    }
    variables.insert("reverse".to_string(), (sort == DEFAULT_SORT).into());
    variables.insert("sortKey".to_string(), sort.into());

    let data = state
        .storefront
        .query(PRODUCTS_QUERY, Some(Value::Object(variables)), None)
        .await
        .and_then(decode::<ProductsData>)
        .map_err(ApiError::storefront("PRODUCTS_FETCH_ERROR"))?;

    let items: Vec<ProductSummary> = data
        .products
        .edges
        .into_iter()
        .map(|edge| edge.node.into())
        .collect();
    let total = items.len();

    Ok(Success(ProductList {
        items,
        pagination: Pagination {
            page: 1,
            limit,
            total,
        },
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductByHandleData {
    product_by_handle: Option<Value>,
}

/// `GET /api/products/:handle`
pub(super) async fn detail(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> Result<Success<Value>, ApiError> {
    let data = state
        .storefront
        .query(
            PRODUCT_BY_HANDLE_QUERY,
            Some(serde_json::json!({ "handle": handle })),
            None,
        )
        .await
        .and_then(decode::<ProductByHandleData>)
        .map_err(ApiError::storefront("PRODUCT_FETCH_ERROR"))?;

    data.product_by_handle
        .filter(|product| !product.is_null())
        .map(Success)
        .ok_or(ApiError::NotFound {
            message: "Product not found",
        })
}
