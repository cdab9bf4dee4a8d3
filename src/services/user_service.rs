//! User service: idempotent registration, role lookup and admin operations.

use std::sync::Arc;

use log::{debug, info};
use mongodb::bson::Document;

use crate::constants::ROLE_ADMIN;
use crate::errors::ApiError;
use crate::models::{to_document, DeleteResult, InsertResult, NewUser, UpdateResult};
use crate::repositories::{DocumentStore, UserRepository};
use crate::utils::mask_email;
use crate::validators::parse_object_id;

/// Outcome of a registration attempt.
#[derive(Debug, PartialEq)]
pub enum Registration {
    Created(InsertResult),
    AlreadyExists,
}

pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: UserRepository::new(store),
        }
    }

    /// Register a user unless the email is already taken.
    ///
    /// A concurrent registration that loses the race on the unique email
    /// index is reported as `AlreadyExists` as well.
    pub async fn register(&self, new_user: NewUser) -> Result<Registration, ApiError> {
        if self
            .repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            debug!("Registration skipped, {} exists", mask_email(&new_user.email));
            return Ok(Registration::AlreadyExists);
        }

        let email = mask_email(&new_user.email);
        let doc = to_document(&new_user.without_privileged_fields())?;

        match self.repository.insert(doc).await {
            Ok(result) => {
                info!("Registered user {}", email);
                Ok(Registration::Created(result))
            }
            Err(ApiError::Conflict(_)) => Ok(Registration::AlreadyExists),
            Err(e) => Err(e),
        }
    }

    /// Whether a stored user with this exact email holds the admin role.
    pub async fn is_admin(&self, email: &str) -> Result<bool, ApiError> {
        match self.repository.find_by_email(email).await? {
            Some(user) => {
                debug!(
                    "Role lookup for {}: {:?}",
                    mask_email(&user.email),
                    user.role
                );
                Ok(user.is_admin())
            }
            None => Ok(false),
        }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ApiError> {
        self.repository.list().await
    }

    pub async fn promote_to_admin(&self, id: &str) -> Result<UpdateResult, ApiError> {
        let object_id = parse_object_id(id)?;
        let result = self.repository.set_role(object_id, ROLE_ADMIN).await?;
        info!("Promoted user {} to admin (matched {})", id, result.matched_count);
        Ok(result)
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, ApiError> {
        let object_id = parse_object_id(id)?;
        let result = self.repository.delete(object_id).await?;
        info!("Deleted user {} (deleted {})", id, result.deleted_count);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COLLECTION_USERS;
    use crate::repositories::MemoryStore;
    use mongodb::bson::doc;
    use serde_json::json;

    fn new_user(value: serde_json::Value) -> NewUser {
        serde_json::from_value(value).unwrap()
    }

    #[actix_web::test]
    async fn test_register_is_idempotent_on_email() {
        let store = Arc::new(MemoryStore::new());
        let users = UserService::new(store.clone());

        let first = users
            .register(new_user(json!({ "email": "a@b.com", "name": "A" })))
            .await
            .unwrap();
        assert!(matches!(first, Registration::Created(_)));

        let second = users
            .register(new_user(json!({ "email": "a@b.com", "name": "Other" })))
            .await
            .unwrap();
        assert_eq!(second, Registration::AlreadyExists);
        assert_eq!(store.snapshot(COLLECTION_USERS).len(), 1);
    }

    #[actix_web::test]
    async fn test_registration_cannot_grant_admin() {
        let store = Arc::new(MemoryStore::new());
        let users = UserService::new(store.clone());

        users
            .register(new_user(json!({ "email": "x@b.com", "role": "admin" })))
            .await
            .unwrap();

        assert!(!users.is_admin("x@b.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_is_admin_matches_email_exactly() {
        let store = Arc::new(MemoryStore::new());
        store.seed(COLLECTION_USERS, doc! { "email": "boss@b.com", "role": "admin" });
        let users = UserService::new(store);

        assert!(users.is_admin("boss@b.com").await.unwrap());
        assert!(!users.is_admin("Boss@b.com").await.unwrap());
        assert!(!users.is_admin("nobody@b.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_promote_rejects_malformed_id() {
        let users = UserService::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            users.promote_to_admin("not-an-id").await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_register_losing_unique_index_race_reports_existing() {
        let store = Arc::new(MemoryStore::new());
        store.fail_inserts_with_conflict();
        let users = UserService::new(store.clone());

        let outcome = users
            .register(new_user(json!({ "email": "late@b.com" })))
            .await
            .unwrap();
        assert_eq!(outcome, Registration::AlreadyExists);
        assert!(store.snapshot(COLLECTION_USERS).is_empty());
    }

    #[actix_web::test]
    async fn test_role_lookup_failure_is_propagated() {
        let store = Arc::new(MemoryStore::new());
        store.seed(COLLECTION_USERS, doc! { "email": "boss@b.com", "role": "admin" });
        store.fail_reads();
        let users = UserService::new(store);

        assert!(matches!(
            users.is_admin("boss@b.com").await,
            Err(ApiError::Database(_))
        ));
    }

    #[actix_web::test]
    async fn test_non_string_role_is_not_admin() {
        let store = Arc::new(MemoryStore::new());
        store.seed(COLLECTION_USERS, doc! { "email": "odd@b.com", "role": 1 });
        let users = UserService::new(store);

        assert!(!users.is_admin("odd@b.com").await.unwrap());
    }
}
