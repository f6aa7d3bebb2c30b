//! Configuration error types.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so a
//! misconfigured process fails on first use of the Storefront client rather
//! than on the first remote call.
//!
//! # Example
//!
//! ```rust
//! use storefront_bff::{ConfigError, ShopDomain};
//!
//! let result = ShopDomain::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while resolving or validating configuration.
///
/// These are fatal for the operation that triggered them: missing
/// credentials are never fixed by retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("Missing required environment variable '{name}'. SHOP_DOMAIN and SHOPIFY_STOREFRONT_ACCESS_TOKEN are required.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The storefront access token is empty.
    #[error("Storefront access token cannot be empty.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected 'shop-name', 'shop-name.myshopify.com' or a custom domain.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2026-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Listen port is not a valid `u16`.
    #[error("Invalid port '{value}'. Expected a number between 0 and 65535.")]
    InvalidPort {
        /// The raw value that failed to parse.
        value: String,
    },
}
