//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use shared::models as api;

// ============ Helpers ============

pub fn record_id_to_string(id: &Option<surrealdb::RecordId>) -> String {
    id.as_ref().map(|r| r.to_string()).unwrap_or_default()
}

/// Integer record key ("menu_item:3" → 3)
pub fn record_key_to_i64(id: &Option<surrealdb::RecordId>) -> i64 {
    id.as_ref()
        .and_then(|r| r.key().to_string().parse().ok())
        .unwrap_or_default()
}

/// Stored comments default to "" — surfaced as absent on the wire
fn comment_to_option(comment: String) -> Option<String> {
    if comment.is_empty() {
        None
    } else {
        Some(comment)
    }
}

// ============ Order ============

impl From<db::OrderItem> for api::OrderItem {
    fn from(i: db::OrderItem) -> Self {
        Self {
            menu_item_id: i.menu_item_id,
            quantity: i.quantity,
            name: i.name,
            price: i.price,
            notes: i.notes,
            image: i.image,
        }
    }
}

impl From<db::Order> for api::Order {
    fn from(o: db::Order) -> Self {
        Self {
            id: record_id_to_string(&o.id),
            status: o.status,
            items: o.items.into_iter().map(Into::into).collect(),
            rating: None,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

impl From<db::OrderWithRating> for api::Order {
    fn from(o: db::OrderWithRating) -> Self {
        Self {
            id: record_id_to_string(&o.id),
            status: o.status,
            items: o.items.into_iter().map(Into::into).collect(),
            rating: o.rating.into_iter().next().map(Into::into),
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

// ============ Rating ============

impl From<db::Rating> for api::Rating {
    fn from(r: db::Rating) -> Self {
        Self {
            id: record_id_to_string(&r.id),
            score: r.score,
            comment: comment_to_option(r.comment),
            order_id: r.order.to_string(),
            created_at: r.created_at,
        }
    }
}

impl From<db::RatingWithOrder> for api::RatingWithOrder {
    fn from(r: db::RatingWithOrder) -> Self {
        let order_id = record_id_to_string(&r.order.id);
        Self {
            id: record_id_to_string(&r.id),
            score: r.score,
            comment: comment_to_option(r.comment),
            order_id,
            created_at: r.created_at,
            order: r.order.into(),
        }
    }
}

// ============ Menu Item ============

impl From<db::MenuItem> for api::MenuItem {
    fn from(m: db::MenuItem) -> Self {
        Self {
            id: record_key_to_i64(&m.id),
            name: m.name,
            description: m.description,
            price: m.price,
            image: m.image,
            category: m.category,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
