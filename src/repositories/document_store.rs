//! The document store seam.
//!
//! Every collection repository talks to the database through this trait so
//! that the MongoDB driver is reached from exactly one place.

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult, UpdateResult};

/// CRUD operations over named collections of schema-flexible documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection` matching `filter` (an empty filter matches everything).
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, ApiError>;

    /// First document in `collection` matching `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError>;

    /// Insert `doc`; the store assigns the `_id`.
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertResult, ApiError>;

    /// Merge `fields` into the document with the given id (`$set` semantics).
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, ApiError>;

    /// Delete the document with the given id.
    async fn delete_by_id(&self, collection: &str, id: ObjectId)
        -> Result<DeleteResult, ApiError>;
}
