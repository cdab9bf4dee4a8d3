//! Request extension trait for reading session claims in handlers.

use actix_web::HttpMessage;

use crate::models::SessionClaims;

/// Access to the claims the [`AccessControl`](super::AccessControl) middleware attached.
pub trait RequestExt {
    /// `Some` only on routes guarded by an access policy.
    fn get_claims(&self) -> Option<SessionClaims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_claims(&self) -> Option<SessionClaims> {
        self.extensions().get::<SessionClaims>().cloned()
    }
}
