//! Named authorization guards.
//!
//! Each guard is one stage of the access-control chain. [`AccessControl`]
//! runs them in a fixed order; handlers may call [`require_claims`] to read
//! the identity the chain already established.
//!
//! [`AccessControl`]: super::AccessControl

use actix_web::HttpRequest;
use log::{debug, warn};

use crate::constants::{ERR_FORBIDDEN_ACCESS, ERR_UNAUTHORIZED_ACCESS};
use crate::errors::ApiError;
use crate::models::SessionClaims;
use crate::services::{SessionService, UserService};
use crate::utils::mask_identity;

use super::RequestExt;

/// Claims attached by the access-control middleware, or Unauthorized.
///
/// # Example
/// ```ignore
/// let claims = require_claims(&req)?;
/// ```
pub fn require_claims(req: &HttpRequest) -> Result<SessionClaims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Handler reached without session claims");
        ApiError::Unauthorized(ERR_UNAUTHORIZED_ACCESS.to_string())
    })
}

/// Verify the presented session token. Missing and invalid tokens are indistinguishable to the caller.
pub fn authenticate(
    sessions: &SessionService,
    token: Option<&str>,
) -> Result<SessionClaims, ApiError> {
    let Some(token) = token else {
        debug!("No session cookie presented");
        return Err(ApiError::Unauthorized(ERR_UNAUTHORIZED_ACCESS.to_string()));
    };

    sessions.verify(token).map_err(|rejection| {
        debug!("Session token rejected: {:?}", rejection);
        ApiError::Unauthorized(ERR_UNAUTHORIZED_ACCESS.to_string())
    })
}

/// The session must speak for exactly the identity the request names.
pub fn require_self(claims: &SessionClaims, requested: Option<&str>) -> Result<(), ApiError> {
    match requested {
        Some(requested) if claims.is_identity(requested) => Ok(()),
        requested => {
            warn!(
                "Session {} attempted to act as {}",
                mask_identity(claims.identity()),
                mask_identity(requested)
            );
            Err(ApiError::Forbidden(ERR_FORBIDDEN_ACCESS.to_string()))
        }
    }
}

/// The session's identity must be a stored user with the admin role.
pub async fn require_admin(users: &UserService, claims: &SessionClaims) -> Result<(), ApiError> {
    let Some(identity) = claims.identity() else {
        warn!("Session without identity attempted admin action");
        return Err(ApiError::Forbidden(ERR_FORBIDDEN_ACCESS.to_string()));
    };

    if !users.is_admin(identity).await? {
        warn!(
            "Non-admin user {} attempted admin action",
            mask_identity(Some(identity))
        );
        return Err(ApiError::Forbidden(ERR_FORBIDDEN_ACCESS.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn claims_for(email: &str) -> SessionClaims {
        SessionClaims {
            subject: json!({ "email": email }).as_object().cloned().unwrap(),
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn test_authenticate_without_token() {
        let sessions = SessionService::new("secret", Duration::hours(1));
        assert!(matches!(
            authenticate(&sessions, None),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_authenticate_with_garbage_token() {
        let sessions = SessionService::new("secret", Duration::hours(1));
        assert!(matches!(
            authenticate(&sessions, Some("garbage")),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_require_self() {
        let claims = claims_for("a@b.com");
        assert!(require_self(&claims, Some("a@b.com")).is_ok());
        assert!(matches!(
            require_self(&claims, Some("c@d.com")),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            require_self(&claims, None),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_self_without_identity() {
        let claims = SessionClaims {
            subject: Default::default(),
            iat: 0,
            exp: 0,
        };
        assert!(require_self(&claims, None).is_err());
        assert!(require_self(&claims, Some("")).is_err());
    }

    #[test]
    fn test_require_self_accepts_legacy_identity() {
        let claims = SessionClaims {
            subject: json!({ "userEmail": "old@b.com" }).as_object().cloned().unwrap(),
            iat: 0,
            exp: 0,
        };
        assert!(require_self(&claims, Some("old@b.com")).is_ok());
        assert!(require_self(&claims, Some("OLD@b.com")).is_err());
    }
}
