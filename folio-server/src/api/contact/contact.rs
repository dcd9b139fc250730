//! Contact-form REST API handler
//!
//! Accepts a submission, logs it, acknowledges it. Nothing is stored
//! and no email is sent.

use crate::{ApiError, ApiResult, ContactResponse};

use folio_core::ContactSubmission;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use log::{debug, info};
use serde_json::Value;

const MISSING_FIELDS: &str = "All fields are required";

/// POST /api/contact
///
/// The body is read untyped so the required-field rules stay explicit:
/// an absent key, null, a non-string value, or an empty string all count
/// as missing. A body that is not JSON at all gets the same 400.
pub async fn submit_contact(
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(body) = body.map_err(|rejection| {
        debug!("Rejected contact body: {}", rejection);
        ApiError::validation(MISSING_FIELDS)
    })?;

    let submission = ContactSubmission::from_json(&body).map_err(|e| {
        debug!("{}", e);
        ApiError::validation(MISSING_FIELDS)
    })?;

    info!(
        "Contact form submitted by {} ({}): {}",
        submission.name, submission.email, submission.message
    );

    Ok(Json(ContactResponse::acknowledged()))
}
