//! Small response bodies shared by several handlers.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::MSG_USER_ALREADY_EXISTS;

/// `{"success": true}` acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Answer to "is this email an admin?"
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// Marker returned when registering an email that already exists
#[derive(Debug, Serialize, ToSchema)]
pub struct UserExistsResponse {
    #[schema(example = "user already exist")]
    pub message: String,
    #[serde(rename = "userExist")]
    #[schema(example = 1)]
    pub user_exist: u8,
}

impl Default for UserExistsResponse {
    fn default() -> Self {
        Self {
            message: MSG_USER_ALREADY_EXISTS.to_string(),
            user_exist: 1,
        }
    }
}
