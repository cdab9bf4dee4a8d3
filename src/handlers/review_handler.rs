use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::documents_to_json;
use crate::repositories::ReviewRepository;

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    responses(
        (status = 200, description = "Every review")
    )
)]
pub async fn list_reviews(reviews: web::Data<ReviewRepository>) -> Result<HttpResponse, ApiError> {
    let docs = reviews.list().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(docs)))
}
