//! Role names and session cookie constants.

/// The only role that grants elevated privileges.
pub const ROLE_ADMIN: &str = "admin";

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "access-token";

/// Query parameter naming the identity a self-scoped route acts on.
pub const IDENTITY_QUERY_PARAM: &str = "email";
