//! Cart routes. Every operation here is a Storefront mutation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{acknowledged, caller_ip, decode, ApiError, AppState, Success};
use crate::clients::{build_headers, StorefrontError};
use crate::lenient;
use crate::queries::{
    CART_CREATE_MUTATION, CART_LINES_ADD_MUTATION, CART_LINES_REMOVE_MUTATION,
    CART_LINES_UPDATE_MUTATION,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct CartBody {
    #[serde(deserialize_with = "lenient::list")]
    items: Vec<CartItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CartItem {
    #[serde(deserialize_with = "lenient::string")]
    variant_id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    product_id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    line_id: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    quantity: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewLine {
    merchandise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

impl From<CartItem> for NewLine {
    fn from(item: CartItem) -> Self {
        let non_empty = |id: Option<String>| id.filter(|id| !id.is_empty());
        Self {
            merchandise_id: non_empty(item.variant_id).or_else(|| non_empty(item.product_id)),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
struct LineUpdate {
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct UserError {
    message: String,
}

/// The `{cart, userErrors}` payload every cart mutation returns.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartPayload {
    cart: Option<Value>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl CartPayload {
    fn from_data(mut data: Value, root: &str) -> Result<Self, StorefrontError> {
        let payload = data.get_mut(root).map(Value::take).unwrap_or_default();
        decode(payload)
    }

    /// The cart, or a 400 carrying the first user error.
    fn into_cart(self, code: &'static str) -> Result<Value, ApiError> {
        match self.user_errors.into_iter().next() {
            Some(error) => Err(ApiError::bad_request(code, error.message)),
            None => Ok(self.cart.unwrap_or_default()),
        }
    }
}

/// The request's items, or a 400 when there are none to send.
fn items_of(body: Option<Json<CartBody>>) -> Result<Vec<CartItem>, ApiError> {
    let items = body.map(|Json(body)| body.items).unwrap_or_default();
    if items.is_empty() {
        return Err(ApiError::bad_request("EMPTY", "Items required"));
    }
    Ok(items)
}

/// `POST /api/cart`
pub(super) async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Option<Json<CartBody>>,
) -> Result<Success<Value>, ApiError> {
    let lines: Vec<NewLine> = items_of(body)?.into_iter().map(NewLine::from).collect();
    let buyer = build_headers(caller_ip(&headers, peer).as_deref());

    let payload = state
        .storefront
        .mutate(
            CART_CREATE_MUTATION,
            Some(json!({ "input": { "lines": lines } })),
            Some(&buyer),
        )
        .await
        .and_then(|data| CartPayload::from_data(data, "cartCreate"))
        .map_err(ApiError::storefront("CART_CREATE_ERROR"))?;

    payload.into_cart("CART_ERROR").map(Success)
}

/// `POST /api/cart/:cart_id/items`
pub(super) async fn add(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    body: Option<Json<CartBody>>,
) -> Result<Success<Value>, ApiError> {
    let lines: Vec<NewLine> = items_of(body)?.into_iter().map(NewLine::from).collect();
    let buyer = build_headers(caller_ip(&headers, peer).as_deref());

    let payload = state
        .storefront
        .mutate(
            CART_LINES_ADD_MUTATION,
            Some(json!({ "cartId": cart_id, "lines": lines })),
            Some(&buyer),
        )
        .await
        .and_then(|data| CartPayload::from_data(data, "cartLinesAdd"))
        .map_err(ApiError::storefront("ADD_ERROR"))?;

    payload.into_cart("ADD_ERROR").map(Success)
}

/// `PATCH /api/cart/:cart_id`
pub(super) async fn update(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
    body: Option<Json<CartBody>>,
) -> Result<Success<Value>, ApiError> {
    let lines: Vec<LineUpdate> = items_of(body)?
        .into_iter()
        .map(|item| LineUpdate {
            id: item.line_id,
            quantity: item.quantity,
        })
        .collect();

    let payload = state
        .storefront
        .mutate(
            CART_LINES_UPDATE_MUTATION,
            Some(json!({ "cartId": cart_id, "lines": lines })),
            None,
        )
        .await
        .and_then(|data| CartPayload::from_data(data, "cartLinesUpdate"))
        .map_err(ApiError::storefront("UPDATE_ERROR"))?;

    payload.into_cart("UPDATE_ERROR").map(Success)
}

/// `DELETE /api/cart/:cart_id/items/:line_id`
pub(super) async fn remove(
    State(state): State<Arc<AppState>>,
    Path((cart_id, line_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let payload = state
        .storefront
        .mutate(
            CART_LINES_REMOVE_MUTATION,
            Some(json!({ "cartId": cart_id, "lineIds": [line_id] })),
            None,
        )
        .await
        .and_then(|data| CartPayload::from_data(data, "cartLinesRemove"))
        .map_err(ApiError::storefront("REMOVE_ERROR"))?;

    payload.into_cart("REMOVE_ERROR")?;
    Ok(acknowledged())
}
