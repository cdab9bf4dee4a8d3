//! User handlers: registration, admin status and admin-only user management.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::middleware::require_claims;
use crate::models::{
    documents_to_json, AdminStatusResponse, DeleteResult, InsertResult, NewUser, UpdateResult,
    UserExistsResponse,
};
use crate::services::{Registration, UserService};
use crate::utils::mask_identity;
use crate::validators::validation_errors_to_api_error;

/// Check whether the signed-in user is an admin
///
/// The `email` query parameter must name the session's own identity.
#[utoipa::path(
    get,
    path = "/users/admin",
    tag = "Users",
    params(
        ("email" = String, Query, description = "Email of the signed-in user")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusResponse),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Email does not match the session", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn check_admin(
    users: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_claims(&req)?;
    let admin = match claims.identity() {
        Some(email) => users.is_admin(email).await?,
        None => false,
    };

    Ok(HttpResponse::Ok().json(AdminStatusResponse { admin }))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user document"),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn list_users(users: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let docs = users.list().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(docs)))
}

/// Register a user
///
/// Registering an email that already exists is not an error: the response
/// carries `userExist: 1` and nothing is written.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "User inserted, or `{message, userExist: 1}` when the email is taken", body = InsertResult),
        (status = 400, description = "Missing email", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register_user(
    users: web::Data<UserService>,
    body: web::Json<NewUser>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    match users.register(body.into_inner()).await? {
        Registration::Created(result) => Ok(HttpResponse::Ok().json(result)),
        Registration::AlreadyExists => Ok(HttpResponse::Ok().json(UserExistsResponse::default())),
    }
}

/// Promote a user to admin (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId")
    ),
    responses(
        (status = 200, description = "Role updated", body = UpdateResult),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn promote_user(
    users: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let claims = require_claims(&req)?;
    info!(
        "Admin {} promoting user {}",
        mask_identity(claims.identity()),
        user_id
    );

    let result = users.promote_to_admin(&user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ObjectId")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResult),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn delete_user(
    users: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let claims = require_claims(&req)?;
    info!(
        "Admin {} deleting user {}",
        mask_identity(claims.identity()),
        user_id
    );

    let result = users.delete(&user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}
