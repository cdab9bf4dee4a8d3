//! Error code constants for API responses.
//!
//! These codes give clients a machine-readable identifier for each error type.

// Authentication / authorization
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";

// Request errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_CONFLICT: &str = "CONFLICT";

// Server errors
pub const CODE_DATABASE_ERROR: &str = "DATABASE_ERROR";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
