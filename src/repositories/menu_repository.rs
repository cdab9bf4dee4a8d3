//! Menu repository for the `menu` collection.

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::constants::COLLECTION_MENU;
use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult, UpdateResult};
use crate::repositories::DocumentStore;

pub struct MenuRepository {
    store: Arc<dyn DocumentStore>,
}

impl MenuRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        self.store.find(COLLECTION_MENU, doc! {}).await
    }

    pub async fn insert(&self, item: Document) -> Result<InsertResult, ApiError> {
        self.store.insert_one(COLLECTION_MENU, item).await
    }

    /// Partial merge of `patch` into the stored item.
    pub async fn update(&self, id: ObjectId, patch: Document) -> Result<UpdateResult, ApiError> {
        self.store.update_by_id(COLLECTION_MENU, id, patch).await
    }

    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        self.store.delete_by_id(COLLECTION_MENU, id).await
    }
}
