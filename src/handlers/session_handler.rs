//! Session handlers: issue and clear the session cookie.

use actix_web::{web, HttpResponse};
use log::info;
use serde_json::{Map, Value};

use crate::errors::ApiError;
use crate::models::SuccessResponse;
use crate::services::SessionService;
use crate::utils::mask_identity;

/// Issue a session cookie for the posted identity claims
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Session",
    responses(
        (status = 200, description = "Session cookie set", body = SuccessResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::errors::ErrorResponse)
    )
)]
pub async fn issue_token(
    sessions: web::Data<SessionService>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, ApiError> {
    let subject = body.into_inner();
    let identity = mask_identity(subject.get("email").and_then(Value::as_str));

    let token = sessions.issue(subject)?;
    info!("Session issued for {}", identity);

    Ok(HttpResponse::Ok()
        .cookie(sessions.session_cookie(token))
        .json(SuccessResponse::ok()))
}

/// Clear the session cookie
///
/// The token itself stays valid until it expires; only the client's copy is dropped.
#[utoipa::path(
    post,
    path = "/jwt/remove",
    tag = "Session",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessResponse)
    )
)]
pub async fn remove_token(sessions: web::Data<SessionService>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(sessions.revoke())
        .json(SuccessResponse::ok())
}
