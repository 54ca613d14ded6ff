//! Order Model
//!
//! Orders embed their line items (created atomically, immutable after
//! creation). The rating lives in its own table, linked by record id,
//! and is attached by subquery where the API needs it.

use serde::{Deserialize, Serialize};
use shared::models::OrderStatus;
use surrealdb::RecordId;

use super::rating::Rating;

pub const ORDER_TABLE: &str = "order";

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: String,
    pub updated_at: String,
}

/// Embedded order line — menu item snapshot at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub name: String,
    /// Unit price at order time
    pub price: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Order with its rating attached (list/detail queries)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderWithRating {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: String,
    pub updated_at: String,
    /// Rating subquery result: zero or one rows
    #[serde(default)]
    pub rating: Vec<Rating>,
}

/// Wire input for POST /api/orders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// One requested line in an order-create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
