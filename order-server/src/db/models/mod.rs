//! Database Models
//!
//! Server-side models carry SurrealDB record ids; they convert into the
//! wire models (`shared::models`) in `api::convert`.

pub mod menu_item;
pub mod order;
pub mod rating;

// Re-exports
pub use menu_item::{MENU_ITEM_TABLE, MenuItem};
pub use order::{ORDER_TABLE, Order, OrderCreate, OrderItem, OrderItemInput, OrderWithRating};
pub use rating::{RATING_TABLE, Rating, RatingSubmit, RatingWithOrder};
