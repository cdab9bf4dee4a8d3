//! Review repository for the read-only `reviews` collection.

use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::constants::COLLECTION_REVIEWS;
use crate::errors::ApiError;
use crate::repositories::DocumentStore;

pub struct ReviewRepository {
    store: Arc<dyn DocumentStore>,
}

impl ReviewRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        self.store.find(COLLECTION_REVIEWS, doc! {}).await
    }
}
