//! Error message constants used throughout the application.

// Authentication / authorization
pub const ERR_UNAUTHORIZED_ACCESS: &str = "unauthorized access";
pub const ERR_FORBIDDEN_ACCESS: &str = "forbidden access";

// Request errors
pub const ERR_INVALID_ID: &str = "Invalid id format";
pub const ERR_EMAIL_QUERY_REQUIRED: &str = "email query parameter is required";
pub const ERR_EMPTY_PATCH: &str = "Update body must contain at least one field";
pub const ERR_BODY_NOT_OBJECT: &str = "Request body must be a JSON object";
pub const ERR_ROUTE_NOT_FOUND: &str = "Route not found";

// Server errors
pub const ERR_DATABASE: &str = "database operation failed";
pub const ERR_INTERNAL: &str = "internal server error";
pub const ERR_MISSING_APP_DATA: &str = "Server is missing required application state";
