//! Configuration types for the storefront service.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: everything needed to build the Storefront client
//! - [`StorefrontConfigBuilder`]: fluent construction with validation
//! - [`ServerConfig`]: listen address for the HTTP service
//! - [`ShopDomain`], [`HostUrl`], [`ApiVersion`]: validated value types
//!
//! Environment resolution goes through a lookup function rather than reading
//! `std::env` directly, so it can be exercised without touching the process
//! environment:
//!
//! ```rust
//! use std::collections::HashMap;
//! use storefront_bff::{ApiVersion, StorefrontConfig};
//!
//! let env = HashMap::from([
//!     ("SHOP_DOMAIN", "my-store"),
//!     ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "public-token"),
//! ]);
//! let config =
//!     StorefrontConfig::from_lookup(|key| env.get(key).map(|v| (*v).to_string())).unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! assert_eq!(config.api_version(), &ApiVersion::V2026_01);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::clients::storefront::StorefrontToken;
use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Store domain, e.g. `my-store` or `my-store.myshopify.com`.
pub const SHOP_DOMAIN_VAR: &str = "SHOP_DOMAIN";
/// Public Storefront access token.
pub const ACCESS_TOKEN_VAR: &str = "SHOPIFY_STOREFRONT_ACCESS_TOKEN";
/// Private (server-side) Storefront token; preferred over the public one when set.
pub const PRIVATE_TOKEN_VAR: &str = "SHOPIFY_STOREFRONT_PRIVATE_TOKEN";
/// Storefront API version, `YYYY-MM` or `unstable`.
pub const API_VERSION_VAR: &str = "SHOPIFY_API_VERSION";
/// Origin override for the Storefront endpoint.
pub const API_HOST_VAR: &str = "SHOPIFY_STOREFRONT_API_HOST";
/// Listen host for the HTTP service.
pub const HOST_VAR: &str = "HOST";
/// Listen port for the HTTP service.
pub const PORT_VAR: &str = "PORT";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3333;

/// Configuration for the Storefront client.
///
/// `StorefrontConfig` is `Clone`, `Send` and `Sync`; the token inside masks
/// itself in `Debug` output.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    shop: ShopDomain,
    token: StorefrontToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retry_policy: RetryPolicy,
    retry_mutations: bool,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_bff::{ShopDomain, StorefrontConfig, StorefrontToken};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .token(StorefrontToken::Public("token".to_string()))
    ///     .build()
    ///     .unwrap();
    /// assert!(config.retry_mutations());
    /// ```
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEnvVar`] when `SHOP_DOMAIN` or both token
    ///   variables are unset
    /// - [`ConfigError::InvalidShopDomain`], [`ConfigError::InvalidApiVersion`]
    ///   or [`ConfigError::InvalidHostUrl`] for malformed values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let shop = non_blank(SHOP_DOMAIN_VAR).ok_or(ConfigError::MissingEnvVar {
            name: SHOP_DOMAIN_VAR,
        })?;
        let token = match non_blank(PRIVATE_TOKEN_VAR) {
            Some(private) => StorefrontToken::Private(private),
            None => StorefrontToken::Public(non_blank(ACCESS_TOKEN_VAR).ok_or(
                ConfigError::MissingEnvVar {
                    name: ACCESS_TOKEN_VAR,
                },
            )?),
        };

        let mut builder = Self::builder().shop(ShopDomain::new(shop)?).token(token);
        if let Some(version) = non_blank(API_VERSION_VAR) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = non_blank(API_HOST_VAR) {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        builder.build()
    }

    /// Returns the store domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the Storefront access token.
    #[must_use]
    pub const fn token(&self) -> &StorefrontToken {
        &self.token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the endpoint origin override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the retry policy applied to every operation.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Returns whether mutations share the retry policy of queries.
    #[must_use]
    pub const fn retry_mutations(&self) -> bool {
        self.retry_mutations
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// Required fields are `shop` and `token`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `retry_policy`: 3 attempts, 1000 ms base delay
/// - `retry_mutations`: `true`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    shop: Option<ShopDomain>,
    token: Option<StorefrontToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    retry_policy: Option<RetryPolicy>,
    retry_mutations: Option<bool>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Storefront access token (required).
    #[must_use]
    pub fn token(mut self, token: StorefrontToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for outbound requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Overrides the retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Controls whether mutations are retried on transient failures.
    ///
    /// A mutation that timed out locally may still have completed remotely,
    /// so retrying a non-idempotent write (e.g. `cartCreate`) can apply it
    /// twice. Set to `false` to send every mutation exactly once.
    #[must_use]
    pub const fn retry_mutations(mut self, enabled: bool) -> Self {
        self.retry_mutations = Some(enabled);
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or `token` are
    /// not set, and [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;
        if token.header_value().trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }

        Ok(StorefrontConfig {
            shop,
            token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            retry_policy: self.retry_policy.unwrap_or_default(),
            retry_mutations: self.retry_mutations.unwrap_or(true),
        })
    }
}

/// Listen address for the HTTP service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    /// Resolves the listen address from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the listen address through `lookup`. Defaults to
    /// `0.0.0.0:3333`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup(PORT_VAR).map(|p| p.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Returns the listen port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns `host:port`, suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
