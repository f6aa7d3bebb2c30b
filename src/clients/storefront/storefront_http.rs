//! Single-shot transport for the Storefront GraphQL endpoint.
//!
//! [`StorefrontHttpClient::send`] performs exactly one POST and turns the
//! response into either the `data` payload or a classified
//! [`StorefrontError`]. Retrying is the caller's business.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{RemoteGraphqlError, StorefrontError, TransportError};
use crate::clients::headers::merge_headers;
use crate::clients::SDK_VERSION;
use crate::config::StorefrontConfig;

/// One `reqwest` client bound to one storefront endpoint.
#[derive(Debug)]
pub(super) struct StorefrontHttpClient {
    client: reqwest::Client,
    /// `{origin}/api/{version}/graphql.json`
    endpoint: String,
    default_headers: HashMap<String, String>,
}

// Verify StorefrontHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontHttpClient>();
};

impl StorefrontHttpClient {
    pub(super) fn new(config: &StorefrontConfig) -> Self {
        let shop = config.shop().as_ref();
        let origin = config
            .api_host()
            .map_or_else(|| format!("https://{shop}"), |host| host.origin().to_string());
        let endpoint = format!("{origin}/api/{}/graphql.json", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront BFF v{SDK_VERSION} | Rust {rust_version}");

        let token = config.token();
        let mut default_headers = HashMap::from([
            ("User-Agent".to_string(), user_agent),
            ("Accept".to_string(), "application/json".to_string()),
            (
                token.header_name().to_string(),
                token.header_value().to_string(),
            ),
        ]);

        // Behind a proxy the storefront is still selected by Host
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            default_headers,
        }
    }

    pub(super) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request. `headers` are layered over the defaults.
    pub(super) async fn send(
        &self,
        body: &Value,
        headers: &HashMap<String, String>,
    ) -> Result<Value, StorefrontError> {
        let mut request = self.client.post(&self.endpoint);
        for (name, value) in merge_headers(&self.default_headers, headers) {
            request = request.header(name, value);
        }

        let response = request.body(body.to_string()).send().await?;

        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(StorefrontError::from_status(
                status,
                describe_failure(status, &text),
                request_id,
            ));
        }

        let parsed: Value = serde_json::from_str(&text).map_err(|e| {
            StorefrontError::TerminalTransport(TransportError {
                status: Some(status),
                message: format!("Response body is not valid JSON: {e}"),
                request_id: request_id.clone(),
            })
        })?;

        extract_data(parsed).map_err(|error| match error {
            StorefrontError::TerminalTransport(mut e) => {
                e.status = Some(status);
                e.request_id = request_id;
                StorefrontError::TerminalTransport(e)
            }
            other => other,
        })
    }
}

/// Splits a 2xx GraphQL body into its payload or its errors.
///
/// A non-empty `errors` list wins over any partial `data`. A body with
/// neither is a transport failure.
fn extract_data(body: Value) -> Result<Value, StorefrontError> {
    let Value::Object(mut body) = body else {
        return Err(malformed("Response body is not a JSON object"));
    };

    if let Some(errors) = body.remove("errors") {
        let messages = error_messages(&errors);
        if !messages.is_empty() {
            return Err(RemoteGraphqlError { messages }.into());
        }
    }

    body.remove("data")
        .ok_or_else(|| malformed("Response body has neither data nor errors"))
}

/// Collects messages from an `errors` value: a list of error objects, or the
/// bare string some gateways send instead.
fn error_messages(errors: &Value) -> Vec<String> {
    match errors {
        Value::Array(entries) => entries
            .iter()
            .map(|entry| {
                entry
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| entry.to_string(), String::from)
            })
            .collect(),
        Value::String(message) if !message.is_empty() => vec![message.clone()],
        Value::Null | Value::String(_) => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// Best description of a non-2xx response: the body's own error messages,
/// falling back to the status reason.
fn describe_failure(status: u16, text: &str) -> String {
    let from_body = serde_json::from_str::<Value>(text).ok().and_then(|body| {
        let messages = body
            .get("errors")
            .map(error_messages)
            .filter(|m| !m.is_empty())?;
        Some(messages.join(", "))
    });

    from_body.unwrap_or_else(|| {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status")
            .to_string()
    })
}

fn malformed(message: &str) -> StorefrontError {
    StorefrontError::TerminalTransport(TransportError {
        status: None,
        message: message.to_string(),
        request_id: None,
    })
}

#[cfg(test)]
impl StorefrontHttpClient {
    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}
