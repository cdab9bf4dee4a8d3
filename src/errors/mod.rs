use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::constants::{
    CODE_BAD_REQUEST, CODE_CONFLICT, CODE_DATABASE_ERROR, CODE_FORBIDDEN, CODE_INTERNAL_ERROR,
    CODE_NOT_FOUND, CODE_UNAUTHORIZED, CODE_VALIDATION_FAILED, ERR_DATABASE, ERR_INTERNAL,
};

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Error body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "UNAUTHORIZED")]
    pub code: String,
    #[schema(example = "unauthorized access")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Validation Error: {0:?}")]
    ValidationError(Vec<String>),
    #[error("Database Error: {0}")]
    Database(String),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => CODE_BAD_REQUEST,
            ApiError::Unauthorized(_) => CODE_UNAUTHORIZED,
            ApiError::Forbidden(_) => CODE_FORBIDDEN,
            ApiError::NotFound(_) => CODE_NOT_FOUND,
            ApiError::Conflict(_) => CODE_CONFLICT,
            ApiError::ValidationError(_) => CODE_VALIDATION_FAILED,
            ApiError::Database(_) => CODE_DATABASE_ERROR,
            ApiError::InternalServerError(_) => CODE_INTERNAL_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Server-side failures are logged in full but only a safe message is returned.
        let (message, errors) = match self {
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message) => (message.clone(), None),
            ApiError::ValidationError(errors) => {
                ("Validation failed".to_string(), Some(errors.clone()))
            }
            ApiError::Database(detail) => {
                error!("Database failure: {}", detail);
                (ERR_DATABASE.to_string(), None)
            }
            ApiError::InternalServerError(detail) => {
                error!("Internal failure: {}", detail);
                (ERR_INTERNAL.to_string(), None)
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message,
            errors,
        })
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
            if write_error.code == DUPLICATE_KEY_CODE {
                return ApiError::Conflict(write_error.message.clone());
            }
        }
        ApiError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ApiError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for ApiError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_database_error_hides_detail() {
        let err = ApiError::Database("connection refused at 10.0.0.4".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], CODE_DATABASE_ERROR);
        assert_eq!(json["message"], ERR_DATABASE);
        assert!(!body.windows(7).any(|w| w == b"refused"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Unauthorized(String::new()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden(String::new()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::ValidationError(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
