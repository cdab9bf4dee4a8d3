//! Access-control middleware and the guards it is built from.

pub mod access_control;
pub mod access_log;
pub mod guards;
pub mod request_ext;

pub use access_control::AccessControl;
pub use access_log::access_log;
pub use guards::*;
pub use request_ext::RequestExt;
