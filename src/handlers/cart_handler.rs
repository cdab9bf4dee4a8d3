//! Cart handlers. Ownership is expressed only through the `email` filter.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::ERR_EMAIL_QUERY_REQUIRED;
use crate::errors::ApiError;
use crate::models::{
    documents_to_json, to_document, DeleteResult, EmailQuery, InsertResult, NewCartItem,
};
use crate::repositories::CartRepository;
use crate::validators::{parse_object_id, validation_errors_to_api_error};

/// List the cart items owned by an email
#[utoipa::path(
    get,
    path = "/carts",
    tag = "Carts",
    params(
        ("email" = String, Query, description = "Owner email")
    ),
    responses(
        (status = 200, description = "Cart items owned by the email"),
        (status = 400, description = "Missing email", body = crate::errors::ErrorResponse)
    )
)]
pub async fn list_cart(
    carts: web::Data<CartRepository>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let email = query
        .into_inner()
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::BadRequest(ERR_EMAIL_QUERY_REQUIRED.to_string()))?;

    let items = carts.list_by_owner(&email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(items)))
}

/// Add an item to a cart
#[utoipa::path(
    post,
    path = "/carts",
    tag = "Carts",
    responses(
        (status = 200, description = "Item inserted", body = InsertResult),
        (status = 400, description = "Missing email", body = crate::errors::ErrorResponse)
    )
)]
pub async fn add_cart_item(
    carts: web::Data<CartRepository>,
    body: web::Json<NewCartItem>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let item = to_document(&body.into_inner().without_id())?;
    let result = carts.insert(item).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Remove an item from a cart
#[utoipa::path(
    delete,
    path = "/carts/{id}",
    tag = "Carts",
    params(
        ("id" = String, Path, description = "Cart item ObjectId")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResult),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_cart_item(
    carts: web::Data<CartRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = carts.delete(id).await?;
    Ok(HttpResponse::Ok().json(result))
}
