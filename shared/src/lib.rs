//! Shared types for the Comanda order server
//!
//! Wire models and the push-event contract used by the server and its
//! live viewers (staff dashboard, customer order view).

pub mod message;
pub mod models;

// Re-exports
pub use message::{EventName, PushEvent, Topic};
pub use models::{MenuItem, Order, OrderItem, OrderStatus, Rating};
pub use serde::{Deserialize, Serialize};
