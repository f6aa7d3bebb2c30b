//! HTTP routes.
//!
//! [`router`] assembles the service. Handlers share one [`AppState`]; the
//! Storefront client inside it is built on the first request that needs it,
//! so routes backed by static content work without Storefront credentials.

mod blog;
mod cart;
mod forms;
mod products;
mod response;
mod search;
mod support;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Query};
use axum::http::HeaderMap;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::clients::{LazyStorefrontClient, StorefrontError, TransportError};

pub use response::{acknowledged, ApiError, Success};

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub storefront: LazyStorefrontClient,
}

impl AppState {
    #[must_use]
    pub const fn new(storefront: LazyStorefrontClient) -> Self {
        Self { storefront }
    }
}

/// Builds the complete service.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/products", get(products::list))
        .route("/products/:handle", get(products::detail))
        .route("/cart", post(cart::create))
        .route("/cart/:cart_id", patch(cart::update))
        .route("/cart/:cart_id/items", post(cart::add))
        .route("/cart/:cart_id/items/:line_id", delete(cart::remove))
        .route("/search", get(search::search))
        .route("/contact", post(forms::contact))
        .route("/demo-request", post(forms::demo_request))
        .route("/blog", get(blog::list))
        .route("/blog/:slug", get(blog::detail))
        .route("/support", get(support::list))
        .route("/support/:slug", get(support::detail));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(fallback_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback_404() -> ApiError {
    ApiError::NotFound {
        message: "Route not found",
    }
}

/// Query-string pairs in request order.
///
/// Decoding a list of pairs cannot fail, so a malformed or repeated key never
/// turns into an extractor rejection. A repeated key resolves to its first
/// value.
#[derive(Debug, Default)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Query<Vec<(String, String)>>> for QueryParams {
    fn from(Query(pairs): Query<Vec<(String, String)>>) -> Self {
        Self(pairs)
    }
}

/// Reads a positive numeric query parameter.
///
/// Only the leading integer counts, so `"5abc"` is 5 and `"2.5"` is 2.
/// Missing, zero, and non-numeric values fall back to `default`; anything
/// else is clamped to `1..=max`.
pub(crate) fn numeric_param(raw: Option<&str>, default: usize, max: usize) -> usize {
    match raw.and_then(leading_integer) {
        None | Some(0) => default,
        Some(n) if n < 0 => 1,
        Some(n) => usize::try_from(n).map_or(max, |n| n.min(max)),
    }
}

/// Optional sign followed by digits at the start of `raw`. Overlong digit
/// runs saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// The shopper's IP: the first `X-Forwarded-For` entry, else the peer.
pub(crate) fn caller_ip(
    headers: &HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(String::from)
        .or_else(|| peer.map(|ConnectInfo(addr)| addr.ip().to_string()))
}

/// Reads a Storefront payload into a typed shape.
pub(crate) fn decode<T: DeserializeOwned>(data: Value) -> Result<T, StorefrontError> {
    serde_json::from_value(data).map_err(|e| {
        StorefrontError::TerminalTransport(TransportError {
            status: None,
            message: format!("Unexpected Storefront response shape: {e}"),
            request_id: None,
        })
    })
}
