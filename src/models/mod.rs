//! Data models organized by type.

pub mod cart;
pub mod claims;
pub mod document;
pub mod responses;
pub mod user;

pub use cart::*;
pub use claims::*;
pub use document::*;
pub use responses::*;
pub use user::*;
