//! Repository layer for database operations.
//!
//! One repository per collection, all sharing a single [`DocumentStore`].

pub mod cart_repository;
pub mod document_store;
#[cfg(test)]
pub mod memory_store;
pub mod menu_repository;
pub mod mongo_store;
pub mod review_repository;
pub mod user_repository;

pub use cart_repository::CartRepository;
pub use document_store::DocumentStore;
#[cfg(test)]
pub use memory_store::MemoryStore;
pub use menu_repository::MenuRepository;
pub use mongo_store::MongoStore;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;
