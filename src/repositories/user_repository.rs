//! User repository for the `users` collection.

use std::sync::Arc;

use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult, UpdateResult, User};
use crate::repositories::DocumentStore;

pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Every user document, as stored.
    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        self.store.find(COLLECTION_USERS, doc! {}).await
    }

    /// Find a user by exact (case-sensitive) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email");
        match self
            .store
            .find_one(COLLECTION_USERS, doc! { "email": email })
            .await?
        {
            Some(doc) => Ok(Some(mongodb::bson::from_document(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn insert(&self, user: Document) -> Result<InsertResult, ApiError> {
        self.store.insert_one(COLLECTION_USERS, user).await
    }

    pub async fn set_role(&self, id: ObjectId, role: &str) -> Result<UpdateResult, ApiError> {
        self.store
            .update_by_id(COLLECTION_USERS, id, doc! { "role": role })
            .await
    }

    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, ApiError> {
        self.store.delete_by_id(COLLECTION_USERS, id).await
    }
}
