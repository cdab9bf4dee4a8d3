use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    AdminStatusResponse, DeleteResult, InsertResult, SuccessResponse, UpdateResult,
    UserExistsResponse,
};

/// OpenAPI documentation for the bistro API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bistro API",
        version = "0.1.0",
        description = "Users, menu, carts and reviews for the bistro ordering app. Sessions are carried in the `access-token` cookie.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Session", description = "Issue and clear the session cookie"),
        (name = "Users", description = "Registration and admin user management"),
        (name = "Carts", description = "Per-user cart items"),
        (name = "Menu", description = "Menu items; writes are admin-only"),
        (name = "Reviews", description = "Read-only reviews")
    ),
    paths(
        crate::routes::root,
        crate::handlers::issue_token,
        crate::handlers::remove_token,
        crate::handlers::check_admin,
        crate::handlers::list_users,
        crate::handlers::register_user,
        crate::handlers::promote_user,
        crate::handlers::delete_user,
        crate::handlers::list_cart,
        crate::handlers::add_cart_item,
        crate::handlers::delete_cart_item,
        crate::handlers::list_menu,
        crate::handlers::add_menu_item,
        crate::handlers::update_menu_item,
        crate::handlers::delete_menu_item,
        crate::handlers::list_reviews
    ),
    components(
        schemas(
            SuccessResponse,
            AdminStatusResponse,
            UserExistsResponse,
            InsertResult,
            UpdateResult,
            DeleteResult,
            ErrorResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Cookie-based session security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "access-token",
                    "Signed session token set by POST /jwt",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/jwt",
            "/jwt/remove",
            "/users",
            "/users/admin",
            "/users/admin/{id}",
            "/users/{id}",
            "/carts",
            "/carts/{id}",
            "/menu",
            "/menu/{id}",
            "/reviews",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
