//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Catalog entry — read-mostly, referenced by order items only at
/// order-creation time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}
