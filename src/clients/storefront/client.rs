//! The retrying Storefront GraphQL executor.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use storefront_bff::{build_headers, StorefrontClient, StorefrontConfig};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//!
//! let data = client
//!     .query(
//!         "query Product($handle: String!) { productByHandle(handle: $handle) { title } }",
//!         Some(json!({ "handle": "snowboard" })),
//!         Some(&build_headers(Some("203.0.113.7"))),
//!     )
//!     .await?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde_json::{json, Value};

use crate::clients::errors::StorefrontError;
use crate::clients::headers::request_headers;
use crate::clients::retry::{AttemptOutcome, AttemptState, RetryPolicy};
use crate::clients::storefront::storefront_http::StorefrontHttpClient;
use crate::config::{ApiVersion, StorefrontConfig};

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// A read; always safe to resend.
    Query,
    /// A write; resending may apply it twice.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        })
    }
}

/// GraphQL client for one storefront.
///
/// Each call to [`query`](Self::query) or [`mutate`](Self::mutate) POSTs
/// `{"query", "variables"}` to `/api/{version}/graphql.json`, retrying
/// transient failures (429, 430, 5xx, connection errors) with exponential
/// backoff. A response carrying GraphQL `errors` is never retried.
///
/// `StorefrontClient` is `Send + Sync`; share it behind an `Arc`.
#[derive(Debug)]
pub struct StorefrontClient {
    http_client: StorefrontHttpClient,
    api_version: ApiVersion,
    retry_policy: RetryPolicy,
    retry_mutations: bool,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a client for the configured storefront.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let api_version = config.api_version().clone();
        if api_version.is_deprecated() {
            tracing::warn!(
                "Storefront API version {api_version} is past its support window; \
                 the oldest supported version is {}",
                ApiVersion::minimum_supported()
            );
        }

        Self {
            http_client: StorefrontHttpClient::new(config),
            api_version,
            retry_policy: config.retry_policy(),
            retry_mutations: config.retry_mutations(),
        }
    }

    /// Returns the API version this client targets.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the full GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Returns the retry policy applied to queries.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Runs a read operation and returns its `data` payload.
    ///
    /// `variables` defaults to `{}`. `headers` are layered over the client
    /// defaults and `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidRequest`] if `document` is blank
    /// - [`StorefrontError::RemoteGraphql`] if the response lists errors
    /// - [`StorefrontError::TransientTransport`] once the attempt budget is spent
    /// - [`StorefrontError::TerminalTransport`] for any other transport failure
    pub async fn query(
        &self,
        document: &str,
        variables: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, StorefrontError> {
        self.execute(OperationKind::Query, document, variables, headers)
            .await
    }

    /// Runs a write operation and returns its `data` payload.
    ///
    /// Mutations share the query retry policy unless the client was built
    /// with `retry_mutations(false)`, in which case they are sent once.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    pub async fn mutate(
        &self,
        document: &str,
        variables: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, StorefrontError> {
        self.execute(OperationKind::Mutation, document, variables, headers)
            .await
    }

    /// Runs `document` under the retry policy for `kind`.
    ///
    /// # Errors
    ///
    /// See [`query`](Self::query).
    pub async fn execute(
        &self,
        kind: OperationKind,
        document: &str,
        variables: Option<Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, StorefrontError> {
        if document.trim().is_empty() {
            return Err(StorefrontError::InvalidRequest {
                reason: "GraphQL document cannot be empty",
            });
        }

        let policy = self.policy_for(kind);
        let variables = variables
            .filter(|v| !v.is_null())
            .unwrap_or_else(|| json!({}));
        let body = json!({ "query": document, "variables": variables });
        let headers = request_headers(headers.unwrap_or(&HashMap::new()));

        let mut attempt = 0;
        loop {
            tracing::debug!(
                operation = %kind,
                attempt = attempt + 1,
                max_attempts = policy.max_attempts(),
                "Sending Storefront request"
            );
            let result = self.http_client.send(&body, &headers).await;

            match policy.transition(attempt, AttemptOutcome::of(&result)) {
                AttemptState::Attempting(next) => {
                    let delay = policy.delay_for(attempt);
                    if let Err(error) = &result {
                        tracing::warn!(
                            operation = %kind,
                            "{}",
                            retry_message(next, policy, delay, error)
                        );
                    }
                    if kind == OperationKind::Mutation {
                        tracing::warn!(
                            "Retrying a mutation; if the failed attempt reached the storefront \
                             the write may be applied twice"
                        );
                    }
                    tokio::time::sleep(delay).await;
                    attempt = next;
                }
                AttemptState::FailedExhausted => {
                    tracing::warn!(
                        operation = %kind,
                        attempts = policy.max_attempts(),
                        "Storefront request failed after exhausting retries"
                    );
                    return result;
                }
                AttemptState::Succeeded | AttemptState::FailedTerminal => return result,
            }
        }
    }

    const fn policy_for(&self, kind: OperationKind) -> RetryPolicy {
        match kind {
            OperationKind::Mutation if !self.retry_mutations => RetryPolicy::no_retry(),
            _ => self.retry_policy,
        }
    }
}

/// `[Storefront] Retry {n}/{max} after {ms}ms: {error}`, where `n` counts
/// retries from 1 and `max` is the attempt budget.
fn retry_message(next: u32, policy: RetryPolicy, delay: Duration, error: &StorefrontError) -> String {
    format!(
        "[Storefront] Retry {next}/{} after {}ms: {error}",
        policy.max_attempts(),
        delay.as_millis()
    )
}
