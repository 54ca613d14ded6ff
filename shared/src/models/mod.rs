//! Wire Models
//!
//! Client-facing JSON models (camelCase on the wire). The server's
//! database models convert into these at the API boundary.

pub mod menu_item;
pub mod order;
pub mod rating;

// Re-exports
pub use menu_item::MenuItem;
pub use order::{Order, OrderItem, OrderStatus};
pub use rating::{Rating, RatingWithOrder, MAX_SCORE, MIN_SCORE};
