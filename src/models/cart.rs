use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Request payload for adding an item to a cart.
///
/// `email` names the owning user; the menu item reference and quantity or
/// selection fields are stored as sent.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewCartItem {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewCartItem {
    pub fn without_id(mut self) -> Self {
        self.fields.remove("_id");
        self
    }
}

/// `?email=` query string used by owner-scoped routes
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}
