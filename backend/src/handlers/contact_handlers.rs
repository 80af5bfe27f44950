use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::models::contact::{ContactInquiry, ContactRequest, ContactResponse};
use crate::AppState;

pub const THANK_YOU: &str = "Thank you! Our team will contact you within 24 hours.";

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), (StatusCode, Json<Value>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::info!("Unreadable contact request: {}", rejection.body_text());
        (rejection.status(), Json(json!({"error": rejection.body_text()})))
    })?;

    if let Err(e) = request.validate() {
        tracing::info!("Rejected contact request: {}", e);
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))));
    }

    if state.contact_limiter.check_key(&request.sender_key()).is_err() {
        tracing::warn!("Contact rate limit exceeded for [redacted email]");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests, please try again in a minute"})),
        ));
    }

    let inquiry = ContactInquiry::new(request);
    let id = inquiry.id;
    tracing::info!(
        "Contact inquiry {} received ({:?}, {})",
        id,
        inquiry.request.form_type,
        inquiry.request.deployment_area
    );
    state.inquiries.insert(id, inquiry);

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            id,
            message: THANK_YOU.to_string(),
        }),
    ))
}

pub async fn health_check() -> &'static str {
    "OK"
}
