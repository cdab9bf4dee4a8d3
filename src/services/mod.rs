//! Services organized by domain concern.

pub mod session_service;
pub mod user_service;

pub use session_service::SessionService;
pub use user_service::{Registration, UserService};
