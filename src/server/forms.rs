use axum::Json;

use super::{ApiError, Success};
use crate::forms::{ContactForm, DemoRequestForm, Receipt};

/// `POST /api/contact`
pub(super) async fn contact(body: Option<Json<ContactForm>>) -> Result<Success<Receipt>, ApiError> {
    let form = body.map(|Json(form)| form).unwrap_or_default();
    let details = form.validation_errors();
    if !details.is_empty() {
        return Err(ApiError::Validation { details });
    }

    tracing::info!(
        name = form.name.as_deref().unwrap_or_default(),
        email = form.email.as_deref().unwrap_or_default(),
        message = form.message.as_deref().unwrap_or_default(),
        "Contact form received"
    );
    Ok(Success(Receipt::new("contact")))
}

/// `POST /api/demo-request`
pub(super) async fn demo_request(
    body: Option<Json<DemoRequestForm>>,
) -> Result<Success<Receipt>, ApiError> {
    let form = body.map(|Json(form)| form).unwrap_or_default();
    let details = form.validation_errors();
    if !details.is_empty() {
        return Err(ApiError::Validation { details });
    }

    tracing::info!(
        name = form.name.as_deref().unwrap_or_default(),
        email = form.email.as_deref().unwrap_or_default(),
        company = form.company.as_deref().unwrap_or_default(),
        "Demo request received"
    );
    Ok(Success(Receipt::new("demo")))
}
