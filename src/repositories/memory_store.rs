//! In-memory [`DocumentStore`] used by the test suite.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::errors::ApiError;
use crate::models::{DeleteResult, InsertResult, UpdateResult};
use crate::repositories::DocumentStore;

/// Collections keyed by name. Filters match on top-level field equality only.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
    operations: AtomicUsize,
    reads_unavailable: AtomicBool,
    inserts_conflict: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly, bypassing the operation counter. Returns its id.
    pub fn seed(&self, collection: &str, mut doc: Document) -> ObjectId {
        let id = ObjectId::new();
        doc.insert("_id", id);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        id
    }

    /// Snapshot of a collection, bypassing the operation counter.
    pub fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    /// Number of store calls made through the [`DocumentStore`] trait.
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Make every `find`/`find_one` fail as an unreachable database would.
    pub fn fail_reads(&self) {
        self.reads_unavailable.store(true, Ordering::SeqCst);
    }

    /// Make every `insert_one` fail as a unique index violation would.
    pub fn fail_inserts_with_conflict(&self) {
        self.inserts_conflict.store(true, Ordering::SeqCst);
    }

    fn record(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }

    fn check_reads(&self) -> Result<(), ApiError> {
        if self.reads_unavailable.load(Ordering::SeqCst) {
            return Err(ApiError::Database("server selection timeout".to_string()));
        }
        Ok(())
    }

    fn matches(doc: &Document, filter: &Document) -> bool {
        filter.iter().all(|(key, value)| doc.get(key) == Some(value))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, ApiError> {
        self.record();
        self.check_reads()?;
        Ok(self
            .snapshot(collection)
            .into_iter()
            .filter(|doc| Self::matches(doc, &filter))
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ApiError> {
        self.record();
        self.check_reads()?;
        Ok(self
            .snapshot(collection)
            .into_iter()
            .find(|doc| Self::matches(doc, &filter)))
    }

    async fn insert_one(&self, collection: &str, doc: Document) -> Result<InsertResult, ApiError> {
        self.record();
        if self.inserts_conflict.load(Ordering::SeqCst) {
            return Err(ApiError::Conflict("E11000 duplicate key error".to_string()));
        }
        let id = self.seed(collection, doc);
        Ok(InsertResult::new(id.to_hex()))
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, ApiError> {
        self.record();
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        let Some(doc) = docs
            .iter_mut()
            .find(|doc| doc.get("_id") == Some(&Bson::ObjectId(id)))
        else {
            return Ok(UpdateResult::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }
        Ok(UpdateResult::new(1, u64::from(modified)))
    }

    async fn delete_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<DeleteResult, ApiError> {
        self.record();
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        let before = docs.len();
        docs.retain(|doc| doc.get("_id") != Some(&Bson::ObjectId(id)));
        Ok(DeleteResult::new((before - docs.len()) as u64))
    }
}
