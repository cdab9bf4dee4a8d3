//! MongoDB implementation of [`DocumentStore`].

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_CARTS, COLLECTION_USERS};
use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult, UpdateResult};
use crate::repositories::DocumentStore;

/// Document store backed by one MongoDB database. Cloning shares the client pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    /// Round-trip to the server to confirm the connection works.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create the indexes the server relies on.
    ///
    /// - Unique index on `users.email`
    /// - Index on `carts.email` for owner lookups
    ///
    /// Failures are logged and do not abort startup: existing data may
    /// already hold duplicate emails.
    pub async fn create_indexes(&self) {
        info!("Creating database indexes...");

        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        if let Err(e) = self
            .collection(COLLECTION_USERS)
            .create_index(unique_email)
            .await
        {
            warn!("Could not create unique email index on users: {}", e);
        }

        let cart_owner = IndexModel::builder().keys(doc! { "email": 1 }).build();
        if let Err(e) = self
            .collection(COLLECTION_CARTS)
            .create_index(cart_owner)
            .await
        {
            warn!("Could not create email index on carts: {}", e);
        }

        info!("Database indexes ready");
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, ApiError> {
        debug!("Store: find in {} with filter {:?}", collection, filter);
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError> {
        debug!("Store: find_one in {} with filter {:?}", collection, filter);
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertResult, ApiError> {
        let result = self.collection(collection).insert_one(doc).await?;
        let inserted_id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        debug!("Store: inserted {} into {}", inserted_id, collection);
        Ok(InsertResult::new(inserted_id))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, ApiError> {
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateResult::new(result.matched_count, result.modified_count))
    }

    async fn delete_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<DeleteResult, ApiError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(DeleteResult::new(result.deleted_count))
    }
}
