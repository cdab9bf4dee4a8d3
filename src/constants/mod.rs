//! Application constants module.
//!
//! Centralizes the constant strings used throughout the server: error and
//! success messages, error codes, role names, collection names and the
//! session cookie name.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod roles;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use roles::*;
