//! Rating Model

use serde::{Deserialize, Serialize};

use super::Order;

/// Lowest accepted score
pub const MIN_SCORE: i32 = 1;
/// Highest accepted score
pub const MAX_SCORE: i32 = 5;

/// Post-fulfillment customer score, attached 1:1 to a READY order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub order_id: String,
    pub created_at: String,
}

impl Rating {
    /// Whether a submitted score falls in the accepted 1–5 range
    pub fn valid_score(score: i32) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&score)
    }
}

/// Rating with its order embedded (ratings listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithOrder {
    pub id: String,
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
    pub order_id: String,
    pub created_at: String,
    pub order: Order,
}
