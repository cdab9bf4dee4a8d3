use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{ERR_ROUTE_NOT_FOUND, MSG_SERVER_RUNNING};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AccessControl;
use crate::openapi::ApiDoc;

/// Every route with its access policy. Routes without `.wrap` are public.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Session cookie
        .service(
            web::scope("/jwt")
                .route("", web::post().to(handlers::issue_token))
                .route("/remove", web::post().to(handlers::remove_token)),
        )
        // Users
        .service(
            web::scope("/users")
                .route(
                    "",
                    web::get()
                        .to(handlers::list_users)
                        .wrap(AccessControl::admin()),
                )
                .route("", web::post().to(handlers::register_user))
                // Must be before /{id} so "admin" is not taken for an id
                .route(
                    "/admin",
                    web::get()
                        .to(handlers::check_admin)
                        .wrap(AccessControl::self_only()),
                )
                .route(
                    "/admin/{id}",
                    web::patch()
                        .to(handlers::promote_user)
                        .wrap(AccessControl::admin()),
                )
                .route(
                    "/{id}",
                    web::delete()
                        .to(handlers::delete_user)
                        .wrap(AccessControl::admin()),
                ),
        )
        // Carts: ownership is the `email` filter only
        .service(
            web::scope("/carts")
                .route("", web::get().to(handlers::list_cart))
                .route("", web::post().to(handlers::add_cart_item))
                .route("/{id}", web::delete().to(handlers::delete_cart_item)),
        )
        // Menu
        .service(
            web::scope("/menu")
                .route("", web::get().to(handlers::list_menu))
                .route(
                    "",
                    web::post()
                        .to(handlers::add_menu_item)
                        .wrap(AccessControl::admin()),
                )
                .route(
                    "/{id}",
                    web::patch()
                        .to(handlers::update_menu_item)
                        .wrap(AccessControl::admin()),
                )
                .route(
                    "/{id}",
                    web::delete()
                        .to(handlers::delete_menu_item)
                        .wrap(AccessControl::admin()),
                ),
        )
        // Reviews
        .route("/reviews", web::get().to(handlers::list_reviews));
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = String)
    )
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(MSG_SERVER_RUNNING)
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(ERR_ROUTE_NOT_FOUND.to_string()))
}
