//! Success message constants used throughout the application.

pub const MSG_SERVER_RUNNING: &str = "bistro-server running";
pub const MSG_USER_ALREADY_EXISTS: &str = "user already exist";
