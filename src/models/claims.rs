//! Session token claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims embedded in a session token.
///
/// `subject` is whatever object the client posted when the session was
/// issued; `iat` and `exp` are always set by the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub subject: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// The email this session speaks for. Older clients post `userEmail`.
    pub fn identity(&self) -> Option<&str> {
        self.subject
            .get("email")
            .or_else(|| self.subject.get("userEmail"))
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
    }

    /// Check if the session speaks for the given email (exact, case-sensitive match).
    pub fn is_identity(&self, email: &str) -> bool {
        self.identity() == Some(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(subject: Value) -> SessionClaims {
        SessionClaims {
            subject: subject.as_object().cloned().unwrap_or_default(),
            iat: 0,
            exp: 3600,
        }
    }

    #[test]
    fn test_identity_prefers_email() {
        let c = claims(json!({ "email": "a@b.com", "userEmail": "old@b.com" }));
        assert_eq!(c.identity(), Some("a@b.com"));
    }

    #[test]
    fn test_identity_falls_back_to_user_email() {
        let c = claims(json!({ "userEmail": "old@b.com" }));
        assert_eq!(c.identity(), Some("old@b.com"));
    }

    #[test]
    fn test_identity_missing_or_not_a_string() {
        assert_eq!(claims(json!({ "name": "x" })).identity(), None);
        assert_eq!(claims(json!({ "email": 42 })).identity(), None);
        assert_eq!(claims(json!({ "email": "" })).identity(), None);
    }

    #[test]
    fn test_is_identity_is_case_sensitive() {
        let c = claims(json!({ "email": "a@b.com" }));
        assert!(c.is_identity("a@b.com"));
        assert!(!c.is_identity("A@b.com"));
    }
}
