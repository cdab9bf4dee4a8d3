//! Session token service: issues, verifies and revokes cookie-borne session tokens.
//!
//! Tokens are stateless HS256 JWTs. Nothing is stored server-side, so logout
//! only clears the client's cookie: a copied token stays valid until `exp`.

use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::constants::SESSION_COOKIE;
use crate::errors::ApiError;
use crate::models::SessionClaims;

/// Registered claims the server always sets itself (or must not accept from clients).
const SERVER_OWNED_CLAIMS: [&str; 4] = ["iat", "exp", "nbf", "aud"];

/// Why a token was rejected. Callers answer every variant with the same 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    Malformed,
    Expired,
    BadSignature,
}

pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.access_token_secret,
            Duration::minutes(config.access_token_ttl_minutes),
        )
    }

    /// Sign `subject` into a session token expiring `ttl` from now.
    pub fn issue(&self, mut subject: Map<String, Value>) -> Result<String, ApiError> {
        for claim in SERVER_OWNED_CLAIMS {
            subject.remove(claim);
        }

        let now = Utc::now();
        let claims = SessionClaims {
            subject,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!("Issued session token expiring at {}", claims.exp);
        Ok(token)
    }

    /// Check signature and expiry and return the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenRejection> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                _ => TokenRejection::Malformed,
            })
    }

    /// Cookie carrying a freshly issued token. No Max-Age: it lives for the
    /// browser session, bounded by the token's own expiry.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(true)
            .same_site(SameSite::None)
            .finish()
    }

    /// Cookie that makes the client drop its session.
    pub fn revoke(&self) -> Cookie<'static> {
        let mut cookie = self.session_cookie(String::new());
        cookie.make_removal();
        cookie
    }
}
