//! Menu Item Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub const MENU_ITEM_TABLE: &str = "menu_item";

/// Catalog entry, keyed by an integer record id (`menu_item:1`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}
