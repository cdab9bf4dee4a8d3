//! Response models for API endpoints.

pub mod api;
pub mod results;

pub use api::*;
pub use results::*;
