//! Client layer for the Shopify Storefront API.
//!
//! # Overview
//!
//! - [`storefront::StorefrontClient`]: the retrying GraphQL executor
//! - [`storefront::LazyStorefrontClient`]: process-wide lazy construction
//! - [`RetryPolicy`], [`AttemptState`], [`AttemptOutcome`]: backoff schedule
//! - [`StorefrontError`]: the closed set of failure classes
//! - [`build_headers`], [`merge_headers`]: per-request header composition
//!
//! # Retry Behavior
//!
//! - **429, 430, 5xx, connection failures**: retried with delays of
//!   `base * 2^n` (1s then 2s with the defaults) up to 3 attempts total
//! - **GraphQL `errors` in a 2xx body**: returned immediately
//! - **Other 4xx**: returned immediately

mod errors;
mod headers;
mod retry;
pub mod storefront;

/// Crate version, sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use errors::{RemoteGraphqlError, StorefrontError, TransportError};
pub use headers::{build_headers, merge_headers, request_headers, BUYER_IP_HEADER};
pub use retry::{
    AttemptOutcome, AttemptState, RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS,
};
pub use storefront::{LazyStorefrontClient, OperationKind, StorefrontClient, StorefrontToken};
