//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_CARTS: &str = "carts";
pub const COLLECTION_MENU: &str = "menu";
pub const COLLECTION_REVIEWS: &str = "reviews";
