//! Application state shared by every worker.

use std::sync::Arc;

use actix_web::web;

use crate::errors::ApiError;
use crate::repositories::{CartRepository, DocumentStore, MenuRepository, ReviewRepository};
use crate::services::{SessionService, UserService};

/// Services and repositories built once at startup over a single store.
///
/// Each piece is handed to actix as its own `web::Data` so handlers only
/// extract what they use.
#[derive(Clone)]
pub struct AppState {
    sessions: web::Data<SessionService>,
    users: web::Data<UserService>,
    carts: web::Data<CartRepository>,
    menu: web::Data<MenuRepository>,
    reviews: web::Data<ReviewRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, sessions: SessionService) -> Self {
        Self {
            sessions: web::Data::new(sessions),
            users: web::Data::new(UserService::new(Arc::clone(&store))),
            carts: web::Data::new(CartRepository::new(Arc::clone(&store))),
            menu: web::Data::new(MenuRepository::new(Arc::clone(&store))),
            reviews: web::Data::new(ReviewRepository::new(store)),
        }
    }

    /// Register the shared state and body parsing rules on an app.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.sessions.clone())
            .app_data(self.users.clone())
            .app_data(self.carts.clone())
            .app_data(self.menu.clone())
            .app_data(self.reviews.clone())
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
            );
    }
}
