//! Process-wide lazily constructed Storefront client.
//!
//! The service must start even when Storefront credentials are missing:
//! routes that never touch the storefront (health, forms, blog) keep
//! working, and the first route that needs the client reports the
//! configuration error. Construction happens at most once; a failed
//! attempt is not remembered, so fixing the environment and calling again
//! succeeds.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::clients::errors::StorefrontError;
use crate::clients::storefront::StorefrontClient;
use crate::config::StorefrontConfig;
use crate::error::ConfigError;

type ConfigLoader = dyn Fn() -> Result<StorefrontConfig, ConfigError> + Send + Sync;

/// A [`StorefrontClient`] built on first use.
///
/// # Example
///
/// ```rust
/// use storefront_bff::{ConfigError, LazyStorefrontClient};
///
/// let lazy = LazyStorefrontClient::new(|| {
///     Err(ConfigError::MissingEnvVar { name: "SHOP_DOMAIN" })
/// });
///
/// assert!(lazy.get_client().is_err());
/// assert!(!lazy.is_initialized());
/// ```
pub struct LazyStorefrontClient {
    loader: Box<ConfigLoader>,
    client: OnceCell<Arc<StorefrontClient>>,
}

// Verify LazyStorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LazyStorefrontClient>();
};

impl LazyStorefrontClient {
    /// Creates a provider that resolves its configuration with `loader`.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<StorefrontConfig, ConfigError> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            client: OnceCell::new(),
        }
    }

    /// Creates a provider that reads the process environment on first use.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(StorefrontConfig::from_env)
    }

    /// Creates a provider around an already resolved configuration.
    #[must_use]
    pub fn from_config(config: StorefrontConfig) -> Self {
        Self::new(move || Ok(config.clone()))
    }

    /// Returns the shared client, building it on the first successful call.
    ///
    /// Concurrent first callers block until one of them has finished
    /// construction; all of them then see the same instance.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`ConfigError`]. Nothing is cached on failure.
    pub fn get_client(&self) -> Result<Arc<StorefrontClient>, ConfigError> {
        self.client
            .get_or_try_init(|| {
                let config = (self.loader)()?;
                tracing::info!(
                    shop = %config.shop(),
                    api_version = %config.api_version(),
                    token = config.token().kind(),
                    "Storefront client initialized"
                );
                Ok(Arc::new(StorefrontClient::new(&config)))
            })
            .map(Arc::clone)
    }

    /// Returns `true` once a client has been built.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    /// Runs a read operation on the shared client.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::Configuration`] if the client cannot be built,
    /// otherwise see [`StorefrontClient::query`].
    pub async fn query(
        &self,
        document: &str,
        variables: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, StorefrontError> {
        let client = self.get_client()?;
        client.query(document, variables, headers).await
    }

    /// Runs a write operation on the shared client.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::Configuration`] if the client cannot be built,
    /// otherwise see [`StorefrontClient::mutate`].
    pub async fn mutate(
        &self,
        document: &str,
        variables: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, StorefrontError> {
        let client = self.get_client()?;
        client.mutate(document, variables, headers).await
    }
}

impl fmt::Debug for LazyStorefrontClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyStorefrontClient")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
