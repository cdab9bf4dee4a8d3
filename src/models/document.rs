//! Conversion between request/response JSON and stored BSON documents.

use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::ERR_BODY_NOT_OBJECT;
use crate::errors::ApiError;

/// Render a stored document as JSON with `_id` (and any nested ObjectId) as a hex string.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn documents_to_json(docs: Vec<Document>) -> Vec<Value> {
    docs.into_iter().map(document_to_json).collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Serialize a request payload into a document ready to store.
pub fn to_document<T: Serialize>(payload: &T) -> Result<Document, ApiError> {
    match bson::to_bson(payload)? {
        Bson::Document(doc) => Ok(doc),
        _ => Err(ApiError::BadRequest(ERR_BODY_NOT_OBJECT.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_ids_render_as_hex() {
        let id = ObjectId::new();
        let menu_id = ObjectId::new();
        let value = document_to_json(doc! {
            "_id": id,
            "email": "a@b.com",
            "item": { "menuId": menu_id },
            "tags": [menu_id],
        });

        assert_eq!(value["_id"], id.to_hex());
        assert_eq!(value["item"]["menuId"], menu_id.to_hex());
        assert_eq!(value["tags"][0], menu_id.to_hex());
    }

    #[test]
    fn test_numbers_stay_numbers() {
        let value = document_to_json(doc! { "price": 12.5, "quantity": 2_i32, "stock": 9_i64 });
        assert_eq!(value, json!({ "price": 12.5, "quantity": 2, "stock": 9 }));
    }

    #[test]
    fn test_to_document_from_json_object() {
        let doc = to_document(&json!({ "name": "Soup", "price": 4.5 })).unwrap();
        assert_eq!(doc.get_str("name").unwrap(), "Soup");
        assert_eq!(doc.get_f64("price").unwrap(), 4.5);
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(matches!(
            to_document(&json!([1, 2, 3])),
            Err(ApiError::BadRequest(_))
        ));
    }
}
