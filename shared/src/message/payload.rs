//! Push event payloads

use serde::{Deserialize, Serialize};

use crate::models::{Order, Rating};

/// `order-created` / `order-updated` payload — carries the full
/// post-mutation order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub order: Order,
}

/// `rating-created` / `rating-updated` payload — carries the full rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingPayload {
    pub rating: Rating,
}
