//! Contact form endpoint.

use std::sync::LazyLock;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use regex::Regex;

use crate::error::{ApiError, ApiResult};
use folio_protocol::{ContactForm, ContactReply, ContactSubmission};

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// POST /api/contact — accept a contact form submission.
pub async fn submit_contact(
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> ApiResult<Json<ContactReply>> {
    let Json(form) = payload?;
    let submission = validate(form)?;

    // Delivery (mail, CRM) is not wired; the submission is only logged.
    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        message_len = submission.message.len(),
        "contact form submission"
    );

    Ok(Json(ContactReply {
        success: true,
        message: "Thank you for your message! I will get back to you soon.".into(),
        data: submission,
    }))
}

fn validate(form: ContactForm) -> ApiResult<ContactSubmission> {
    let (Some(name), Some(email), Some(subject), Some(message)) = (
        non_empty(form.name),
        non_empty(form.email),
        non_empty(form.subject),
        non_empty(form.message),
    ) else {
        return Err(ApiError::BadRequest("All fields are required".into()));
    };

    if !is_valid_email(&email) {
        return Err(ApiError::BadRequest("Invalid email address".into()));
    }

    Ok(ContactSubmission {
        name,
        email,
        subject,
        message,
        received_at: Utc::now(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
