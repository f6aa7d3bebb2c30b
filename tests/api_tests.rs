//! Route tests for the HTTP service.
//!
//! Storefront-backed routes run against a mock storefront; static routes run
//! with no Storefront configuration at all.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use storefront_bff::queries::{
    CART_CREATE_MUTATION, CART_LINES_REMOVE_MUTATION, CART_LINES_UPDATE_MUTATION, PRODUCTS_QUERY,
    SEARCH_QUERY,
};
use storefront_bff::server::{router, AppState};
use storefront_bff::{
    HostUrl, LazyStorefrontClient, RetryPolicy, ShopDomain, StorefrontConfig, StorefrontToken,
};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/api/2026-01/graphql.json";

fn app_for(server: &MockServer) -> Router {
    let config = StorefrontConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .token(StorefrontToken::Public("public-token".to_string()))
        .api_host(HostUrl::new(server.uri()).unwrap())
        .retry_policy(RetryPolicy::new(2, Duration::from_millis(1)))
        .build()
        .unwrap();
    router(Arc::new(AppState::new(LazyStorefrontClient::from_config(
        config,
    ))))
}

fn unconfigured_app() -> Router {
    let storefront = LazyStorefrontClient::new(|| StorefrontConfig::from_lookup(|_| None));
    router(Arc::new(AppState::new(storefront)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn mock_storefront(server: &MockServer, expected_body: Value, response: Value) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

fn product_node(handle: &str, with_image: bool) -> Value {
    let images = if with_image {
        json!([{ "node": { "url": format!("https://cdn.example.com/{handle}.png"), "altText": null } }])
    } else {
        json!([])
    };
    json!({
        "node": {
            "id": format!("gid://shopify/Product/{handle}"),
            "handle": handle,
            "title": handle.to_uppercase(),
            "description": "",
            "priceRange": { "minVariantPrice": { "amount": "10.0", "currencyCode": "USD" } },
            "compareAtPriceRange": { "minVariantPrice": { "amount": "0.0", "currencyCode": "USD" } },
            "images": { "edges": images },
            "availableForSale": true,
            "tags": [],
            "vendor": "Acme",
            "productType": "Board"
        },
        "cursor": "c"
    })
}

// ============================================================================
// Service Basics
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(unconfigured_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_enveloped_404() {
    let (status, body) = send(unconfigured_app(), get("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_products_list_with_defaults() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({
            "query": PRODUCTS_QUERY,
            "variables": { "first": 24, "sortKey": "CREATED_AT", "reverse": true }
        }),
        json!({ "data": { "products": {
            "edges": [product_node("snowboard", true), product_node("wax", false)],
            "pageInfo": { "hasNextPage": false, "endCursor": null }
        } } }),
    )
    .await;

    let (status, body) = send(app_for(&server), get("/api/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["data"]["items"][0],
        json!({
            "id": "gid://shopify/Product/snowboard",
            "handle": "snowboard",
            "title": "SNOWBOARD",
            "price": { "amount": "10.0", "currencyCode": "USD" },
            "image": { "url": "https://cdn.example.com/snowboard.png", "altText": null },
            "available": true
        })
    );
    assert_eq!(body["data"]["items"][1]["image"], Value::Null);
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 1, "limit": 24, "total": 2 })
    );
}

#[tokio::test]
async fn test_products_list_clamps_limit_and_forwards_filters() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({
            "query": PRODUCTS_QUERY,
            "variables": { "first": 100, "query": "snow", "sortKey": "TITLE", "reverse": false }
        }),
        json!({ "data": { "products": { "edges": [], "pageInfo": { "hasNextPage": false } } } }),
    )
    .await;

    let (status, body) = send(
        app_for(&server),
        get("/api/products?limit=500&q=snow&sort=TITLE"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["limit"], 100);
    assert_eq!(body["data"]["items"], json!([]));
}

#[tokio::test]
async fn test_products_list_graphql_error_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Throttled" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), get("/api/products")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        json!({ "code": "PRODUCTS_FETCH_ERROR", "message": "Storefront GraphQL Error: Throttled" })
    );
}

#[tokio::test]
async fn test_products_without_configuration_is_500_but_static_routes_work() {
    let app = unconfigured_app();

    let (status, body) = send(app.clone(), get("/api/products")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "PRODUCTS_FETCH_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("SHOP_DOMAIN"));

    let (status, _) = send(app, get("/api/blog")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_product_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "productByHandle": { "id": "p1", "handle": "snowboard", "title": "Snowboard" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), get("/api/products/snowboard")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["handle"], "snowboard");
}

#[tokio::test]
async fn test_product_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "productByHandle": null } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), get("/api/products/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "ok": false, "error": { "code": "NOT_FOUND", "message": "Product not found" } })
    );
}

#[tokio::test]
async fn test_product_detail_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), get("/api/products/snowboard")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "PRODUCT_FETCH_ERROR");
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_cart_create_requires_items() {
    let (status, body) = send(
        unconfigured_app(),
        with_json("POST", "/api/cart", &json!({ "items": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!({ "code": "EMPTY", "message": "Items required" })
    );
}

#[tokio::test]
async fn test_cart_create_forwards_buyer_ip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("Shopify-Storefront-Buyer-IP", "203.0.113.7"))
        .and(body_json(json!({
            "query": CART_CREATE_MUTATION,
            "variables": { "input": { "lines": [
                { "merchandiseId": "gid://shopify/ProductVariant/1", "quantity": 2 },
                { "merchandiseId": "gid://shopify/Product/9", "quantity": 1 }
            ] } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "cartCreate": {
                "cart": { "id": "gid://shopify/Cart/1", "totalQuantity": 3 },
                "userErrors": []
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/cart")
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .body(Body::from(
            json!({ "items": [
                { "variantId": "gid://shopify/ProductVariant/1", "quantity": 2 },
                { "productId": "gid://shopify/Product/9", "quantity": 1 }
            ] })
            .to_string(),
        ))
        .unwrap();
    let (status, body) = send(app_for(&server), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "ok": true, "data": { "id": "gid://shopify/Cart/1", "totalQuantity": 3 } })
    );
}

#[tokio::test]
async fn test_cart_create_user_error_is_400() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "cartCreate": {
                "cart": null,
                "userErrors": [{ "field": ["input"], "message": "Merchandise does not exist" }]
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        with_json("POST", "/api/cart", &json!({ "items": [{ "variantId": "x", "quantity": 1 }] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!({ "code": "CART_ERROR", "message": "Merchandise does not exist" })
    );
}

#[tokio::test]
async fn test_cart_add_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "cartLinesAdd": { "cart": { "id": "c1", "totalQuantity": 4 }, "userErrors": [] } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        with_json(
            "POST",
            "/api/cart/c1/items",
            &json!({ "items": [{ "variantId": "v2", "quantity": 1 }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalQuantity"], 4);
}

#[tokio::test]
async fn test_cart_update_maps_line_ids() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({
            "query": CART_LINES_UPDATE_MUTATION,
            "variables": { "cartId": "c1", "lines": [{ "id": "line-1", "quantity": 5 }] }
        }),
        json!({
            "data": { "cartLinesUpdate": { "cart": { "id": "c1", "totalQuantity": 5 }, "userErrors": [] } }
        }),
    )
    .await;

    let (status, body) = send(
        app_for(&server),
        with_json(
            "PATCH",
            "/api/cart/c1",
            &json!({ "items": [{ "lineId": "line-1", "quantity": 5 }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalQuantity"], 5);
}

#[tokio::test]
async fn test_cart_update_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app_for(&server),
        with_json(
            "PATCH",
            "/api/cart/c1",
            &json!({ "items": [{ "lineId": "line-1", "quantity": 1 }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPDATE_ERROR");
}

#[tokio::test]
async fn test_cart_create_accepts_string_quantity() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({
            "query": CART_CREATE_MUTATION,
            "variables": { "input": { "lines": [
                { "merchandiseId": "gid://shopify/ProductVariant/1", "quantity": 2 }
            ] } }
        }),
        json!({
            "data": { "cartCreate": { "cart": { "id": "c1", "totalQuantity": 2 }, "userErrors": [] } }
        }),
    )
    .await;

    let (status, body) = send(
        app_for(&server),
        with_json(
            "POST",
            "/api/cart",
            &json!({ "items": [{ "variantId": "gid://shopify/ProductVariant/1", "quantity": "2" }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalQuantity"], 2);
}

#[tokio::test]
async fn test_cart_add_and_update_without_items_never_reach_storefront() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for request in [
        with_json("POST", "/api/cart/c1/items", &json!({})),
        with_json("POST", "/api/cart/c1/items", &json!({ "items": "v1" })),
        with_json("PATCH", "/api/cart/c1", &json!({ "items": [] })),
        with_json("PATCH", "/api/cart/c1", &json!({ "items": [7, null] })),
    ] {
        let (status, body) = send(app_for(&server), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            json!({ "code": "EMPTY", "message": "Items required" })
        );
    }
}

#[tokio::test]
async fn test_cart_remove_line() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({
            "query": CART_LINES_REMOVE_MUTATION,
            "variables": { "cartId": "c1", "lineIds": ["line-1"] }
        }),
        json!({ "data": { "cartLinesRemove": { "cart": { "id": "c1" }, "userErrors": [] } } }),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/cart/c1/items/line-1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app_for(&server), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_cart_remove_user_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "cartLinesRemove": {
                "cart": null,
                "userErrors": [{ "field": ["lineIds"], "message": "Line not found" }]
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/cart/c1/items/missing")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app_for(&server), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!({ "code": "REMOVE_ERROR", "message": "Line not found" })
    );
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_rejects_short_queries() {
    for uri in ["/api/search", "/api/search?q=a"] {
        let (status, body) = send(unconfigured_app(), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            json!({ "code": "INVALID_QUERY", "message": "Min 2 chars" })
        );
    }
}

#[tokio::test]
async fn test_search_returns_hits() {
    let server = MockServer::start().await;
    mock_storefront(
        &server,
        json!({ "query": SEARCH_QUERY, "variables": { "query": "board", "first": 10 } }),
        json!({ "data": { "products": { "edges": [product_node("snowboard", true)] } } }),
    )
    .await;

    let (status, body) = send(app_for(&server), get("/api/search?q=board")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(
        body["data"]["hits"][0],
        json!({
            "type": "product",
            "id": "gid://shopify/Product/snowboard",
            "title": "SNOWBOARD",
            "slug": "snowboard",
            "image": { "url": "https://cdn.example.com/snowboard.png", "altText": null }
        })
    );
}

#[tokio::test]
async fn test_search_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = send(app_for(&server), get("/api/search?q=board")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "SEARCH_ERROR");
}

// ============================================================================
// Forms
// ============================================================================

#[tokio::test]
async fn test_contact_validation_errors() {
    let (status, body) = send(
        unconfigured_app(),
        with_json("POST", "/api/contact", &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!({
            "code": "VALIDATION_ERROR",
            "message": "Validation failed",
            "details": [
                "Name required (min 2 chars)",
                "Valid email required",
                "Message required",
                "Privacy consent required"
            ]
        })
    );
}

#[tokio::test]
async fn test_contact_without_body_validates_as_empty() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(unconfigured_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_contact_success() {
    let (status, body) = send(
        unconfigured_app(),
        with_json(
            "POST",
            "/api/contact",
            &json!({
                "name": "Test User",
                "email": "test@test.com",
                "message": "Hello",
                "consent_to_privacy": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["data"]["id"].as_str().unwrap().starts_with("contact_"));
    assert_eq!(body["data"]["message"], "Received");
}

#[tokio::test]
async fn test_contact_accepts_truthy_consent() {
    let (status, body) = send(
        unconfigured_app(),
        with_json(
            "POST",
            "/api/contact",
            &json!({
                "name": "Test User",
                "email": "test@test.com",
                "message": "Hello",
                "consent_to_privacy": "yes"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].as_str().unwrap().starts_with("contact_"));
}

#[tokio::test]
async fn test_contact_mistyped_name_reports_only_name() {
    let (status, body) = send(
        unconfigured_app(),
        with_json(
            "POST",
            "/api/contact",
            &json!({
                "name": 123,
                "email": "test@test.com",
                "message": "Hello",
                "consent_to_privacy": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        json!(["Name required (min 2 chars)"])
    );
}

#[tokio::test]
async fn test_demo_request_validation() {
    let (status, body) = send(
        unconfigured_app(),
        with_json(
            "POST",
            "/api/demo-request",
            &json!({ "name": "Test User", "email": "not-an-email", "consent_to_privacy": true }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        json!(["Valid email required", "Company required"])
    );
}

#[tokio::test]
async fn test_demo_request_success() {
    let (status, body) = send(
        unconfigured_app(),
        with_json(
            "POST",
            "/api/demo-request",
            &json!({
                "name": "Test User",
                "email": "test@test.com",
                "company": "Acme",
                "consent_to_privacy": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].as_str().unwrap().starts_with("demo_"));
}

// ============================================================================
// Blog and Support
// ============================================================================

#[tokio::test]
async fn test_blog_list() {
    let (status, body) = send(unconfigured_app(), get("/api/blog")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 1, "limit": 12, "total": 3 })
    );
}

#[tokio::test]
async fn test_blog_list_pages() {
    let (_, body) = send(unconfigured_app(), get("/api/blog?limit=2&page=2")).await;

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "api-integration");
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 2, "limit": 2, "total": 3 })
    );
}

#[tokio::test]
async fn test_blog_list_reads_leading_integers() {
    let (status, body) = send(unconfigured_app(), get("/api/blog?limit=2abc&page=2.5")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 2, "limit": 2, "total": 3 })
    );
}

#[tokio::test]
async fn test_repeated_query_keys_use_first_value() {
    let (status, body) = send(unconfigured_app(), get("/api/support?limit=1&limit=2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    let (status, body) = send(unconfigured_app(), get("/api/search?q=a&q=board")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_blog_post_by_slug() {
    let (status, body) = send(unconfigured_app(), get("/api/blog/getting-started")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "getting-started");
    assert_eq!(body["data"]["publishedAt"], "2024-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_blog_post_not_found() {
    let (status, body) = send(unconfigured_app(), get("/api/blog/not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Post not found");
}

#[tokio::test]
async fn test_support_list_and_filters() {
    let (status, body) = send(unconfigured_app(), get("/api/support")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 4);

    let (_, body) = send(unconfigured_app(), get("/api/support?category=technical")).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["category"] == "technical"));

    let (_, body) = send(unconfigured_app(), get("/api/support?q=password")).await;
    assert_eq!(body["data"]["items"][0]["slug"], "reset-password");
}

#[tokio::test]
async fn test_support_limit_keeps_total() {
    let (_, body) = send(unconfigured_app(), get("/api/support?limit=1")).await;

    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["total"], 4);
}

#[tokio::test]
async fn test_support_article_by_slug() {
    let (status, body) = send(unconfigured_app(), get("/api/support/billing-faq")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tags"], json!(["billing", "payment"]));

    let (status, body) = send(unconfigured_app(), get("/api/support/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Article not found");
}
