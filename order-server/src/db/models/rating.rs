//! Rating Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::order::Order;

pub const RATING_TABLE: &str = "rating";

/// Rating entity — at most one per order, guarded by a unique index on
/// the `order` link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub score: i32,
    #[serde(default)]
    pub comment: String,
    /// Record link to the rated order
    pub order: RecordId,
    pub created_at: String,
}

/// Wire input for POST /api/ratings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmit {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Rating with its order fetched (ratings listing)
#[derive(Debug, Clone, Deserialize)]
pub struct RatingWithOrder {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub score: i32,
    #[serde(default)]
    pub comment: String,
    /// Full order record (FETCH order)
    pub order: Order,
    pub created_at: String,
}
