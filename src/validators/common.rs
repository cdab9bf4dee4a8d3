//! Common validation utilities and helpers.

use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::constants::ERR_INVALID_ID;
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Parse a path id into an ObjectId, failing with 400 instead of reaching the store.
pub fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_ID.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCartItem;
    use validator::Validate;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(
            parse_object_id("123"),
            Err(ApiError::BadRequest(_))
        ));
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_validation_errors_carry_messages() {
        let item: NewCartItem = serde_json::from_str(r#"{"menuId":"abc"}"#).unwrap();
        let err = validation_errors_to_api_error(item.validate().unwrap_err());
        match err {
            ApiError::ValidationError(errors) => assert_eq!(errors, vec!["email is required"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
