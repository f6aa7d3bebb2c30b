//! Storefront API client.
//!
//! - [`StorefrontClient`]: executes GraphQL documents with retry
//! - [`LazyStorefrontClient`]: builds the client on first use, once
//! - [`StorefrontToken`]: public or private access token
//!
//! The Storefront API lives at `/api/{version}/graphql.json` (no `/admin`
//! prefix) and authenticates with a storefront token header rather than an
//! Admin API access token.

mod client;
mod lazy;
mod storefront_http;
mod token;

pub use client::{OperationKind, StorefrontClient};
pub use lazy::LazyStorefrontClient;
pub use token::{StorefrontToken, PRIVATE_HEADER_NAME, PUBLIC_HEADER_NAME};
