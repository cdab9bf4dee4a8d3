//! Cart repository for the `carts` collection.

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::constants::COLLECTION_CARTS;
use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult};
use crate::repositories::DocumentStore;

pub struct CartRepository {
    store: Arc<dyn DocumentStore>,
}

impl CartRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Cart items owned by `email` (exact match).
    pub async fn list_by_owner(&self, email: &str) -> Result<Vec<Document>, ApiError> {
        self.store
            .find(COLLECTION_CARTS, doc! { "email": email })
            .await
    }

    pub async fn insert(&self, item: Document) -> Result<InsertResult, ApiError> {
        self.store.insert_one(COLLECTION_CARTS, item).await
    }

    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        self.store.delete_by_id(COLLECTION_CARTS, id).await
    }
}
