//! JSON envelopes shared by every route.
//!
//! Success: `{"ok": true, "data": ...}`.
//! Failure: `{"ok": false, "error": {"code", "message", "details"?}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::clients::StorefrontError;

/// A successful response carrying `data`.
#[derive(Debug)]
pub struct Success<T>(pub T);

#[derive(Serialize)]
struct SuccessBody<T> {
    ok: bool,
    data: T,
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(SuccessBody {
            ok: true,
            data: self.0,
        })
        .into_response()
    }
}

/// A successful response with no data.
#[must_use]
pub fn acknowledged() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// Every way a route can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with code `NOT_FOUND`.
    #[error("{message}")]
    NotFound { message: &'static str },

    /// 400 with a route-specific code.
    #[error("{message}")]
    BadRequest { code: &'static str, message: String },

    /// 400 `VALIDATION_ERROR` listing every failed rule.
    #[error("Validation failed")]
    Validation { details: Vec<&'static str> },

    /// 500 with a route-specific code wrapping the executor failure.
    #[error("{source}")]
    Storefront {
        code: &'static str,
        source: StorefrontError,
    },
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    /// Adapter for `map_err`: tags an executor failure with `code`.
    pub fn storefront(code: &'static str) -> impl FnOnce(StorefrontError) -> Self {
        move |source| Self::Storefront { code, source }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Storefront { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::BadRequest { code, .. } | Self::Storefront { code, .. } => *code,
            Self::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [&'static str]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storefront { code, source } = &self {
            tracing::error!(code, error = %source, "Storefront call failed");
        }

        let details = match &self {
            Self::Validation { details } => Some(details.as_slice()),
            _ => None,
        };
        let body = json!({
            "ok": false,
            "error": ErrorBody {
                code: self.code(),
                message: self.to_string(),
                details,
            },
        });

        (self.status(), Json(body)).into_response()
    }
}
