//! Menu handlers. Reads are public; writes are admin-only.

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde_json::{Map, Value};

use crate::constants::ERR_EMPTY_PATCH;
use crate::errors::ApiError;
use crate::middleware::require_claims;
use crate::models::{documents_to_json, to_document, DeleteResult, InsertResult, UpdateResult};
use crate::repositories::MenuRepository;
use crate::utils::mask_identity;
use crate::validators::parse_object_id;

/// List the menu
#[utoipa::path(
    get,
    path = "/menu",
    tag = "Menu",
    responses(
        (status = 200, description = "Every menu item")
    )
)]
pub async fn list_menu(menu: web::Data<MenuRepository>) -> Result<HttpResponse, ApiError> {
    let items = menu.list().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(items)))
}

/// Add a menu item (admin only)
#[utoipa::path(
    post,
    path = "/menu",
    tag = "Menu",
    responses(
        (status = 200, description = "Item inserted", body = InsertResult),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn add_menu_item(
    menu: web::Data<MenuRepository>,
    body: web::Json<Map<String, Value>>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_claims(&req)?;
    let mut item = body.into_inner();
    item.remove("_id");

    let result = menu.insert(to_document(&item)?).await?;
    info!(
        "Admin {} added menu item {}",
        mask_identity(claims.identity()),
        result.inserted_id
    );
    Ok(HttpResponse::Ok().json(result))
}

/// Edit a menu item (admin only)
///
/// The body is merged into the stored item; fields it does not mention are left unchanged.
#[utoipa::path(
    patch,
    path = "/menu/{id}",
    tag = "Menu",
    params(
        ("id" = String, Path, description = "Menu item ObjectId")
    ),
    responses(
        (status = 200, description = "Update outcome", body = UpdateResult),
        (status = 400, description = "Malformed id or empty body", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::errors::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn update_menu_item(
    menu: web::Data<MenuRepository>,
    path: web::Path<String>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;

    let mut patch = body.into_inner();
    patch.remove("_id");
    if patch.is_empty() {
        return Err(ApiError::BadRequest(ERR_EMPTY_PATCH.to_string()));
    }

    let result = menu.update(id, to_document(&patch)?).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Delete a menu item (admin only)
#[utoipa::path(
    delete,
    path = "/menu/{id}",
    tag = "Menu",
    params(
        ("id" = String, Path, description = "Menu item ObjectId")
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
pub async fn delete_menu_item(
    menu: web::Data<MenuRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = menu.delete(id).await?;
    Ok(HttpResponse::Ok().json(result))
}
