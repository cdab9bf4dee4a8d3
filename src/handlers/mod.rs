//! HTTP request handlers organized by resource.

pub mod cart_handler;
pub mod menu_handler;
pub mod review_handler;
pub mod session_handler;
pub mod user_handler;

pub use cart_handler::*;
pub use menu_handler::*;
pub use review_handler::*;
pub use session_handler::*;
pub use user_handler::*;
