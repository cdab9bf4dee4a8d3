use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::constants::ROLE_ADMIN;

/// The part of a stored user document the server reasons about.
///
/// Users are flat documents (name, photo and whatever else the client
/// registered with); those fields are passed through untouched and ignored here.
/// `role` is kept as raw BSON: anything other than the string `"admin"`,
/// including numbers and arrays written by hand, is simply not admin.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Bson>,
}

impl User {
    /// Check if this user holds the admin role
    pub fn is_admin(&self) -> bool {
        matches!(&self.role, Some(Bson::String(role)) if role == ROLE_ADMIN)
    }
}

/// Request payload for user registration
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewUser {
    /// Drop fields a client may not set on its own account.
    pub fn without_privileged_fields(mut self) -> Self {
        self.fields.remove("_id");
        self.fields.remove("role");
        self
    }
}
