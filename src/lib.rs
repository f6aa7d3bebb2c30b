//! # Storefront BFF
//!
//! A backend-for-frontend HTTP API over the Shopify Storefront GraphQL API.
//! It serves catalog, cart and search routes backed by the storefront, static
//! blog and support content, and lead-generation forms.
//!
//! ## Overview
//!
//! - [`StorefrontConfig`] and [`StorefrontConfigBuilder`]: validated configuration
//! - [`LazyStorefrontClient`]: the process-wide client, built on first use
//! - [`StorefrontClient`]: GraphQL execution with bounded exponential backoff
//! - [`StorefrontError`]: configuration, remote GraphQL, transient and
//!   terminal transport failures
//! - [`build_headers`]: forwards a shopper's IP to the storefront
//! - [`server::router`]: the axum service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_bff::server::{router, AppState};
//! use storefront_bff::LazyStorefrontClient;
//!
//! let app = router(Arc::new(AppState::new(LazyStorefrontClient::from_env())));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3333").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Running Queries Directly
//!
//! ```rust,ignore
//! use serde_json::json;
//! use storefront_bff::{build_headers, LazyStorefrontClient};
//!
//! let storefront = LazyStorefrontClient::from_env();
//! let data = storefront
//!     .query(
//!         "query { shop { name } }",
//!         Some(json!({})),
//!         Some(&build_headers(Some("203.0.113.7"))),
//!     )
//!     .await?;
//! ```

pub mod clients;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
mod lenient;
pub mod queries;
pub mod server;

// Re-export public types at crate root for convenience
pub use config::{
    ApiVersion, HostUrl, ServerConfig, ShopDomain, StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    build_headers, merge_headers, AttemptOutcome, AttemptState, LazyStorefrontClient,
    OperationKind, RemoteGraphqlError, RetryPolicy, StorefrontClient, StorefrontError,
    StorefrontToken, TransportError, BUYER_IP_HEADER,
};
