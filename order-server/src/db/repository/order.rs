//! Order Repository
//!
//! Reads plus the two writes the lifecycle engine needs: atomic create
//! and a status-checked update. No delete — orders are never removed.

use shared::models::OrderStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ORDER_TABLE, Order, OrderItem, OrderWithRating};

const WITH_RATING: &str = "SELECT *, (SELECT * FROM rating WHERE order = $parent.id) AS rating \
     FROM order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Accept both "order:key" and bare "key" forms
    fn record_id(id: &str) -> RecordId {
        let key = id.strip_prefix("order:").unwrap_or(id);
        RecordId::from_table_key(ORDER_TABLE, key)
    }

    /// Create a new PENDING order with its items (single atomic create)
    pub async fn create(&self, items: Vec<OrderItem>, now: &str) -> RepoResult<Order> {
        let order = Order {
            id: None,
            status: OrderStatus::Pending,
            items,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders, newest first, rating attached
    pub async fn find_all(&self) -> RepoResult<Vec<OrderWithRating>> {
        let orders: Vec<OrderWithRating> = self
            .base
            .db()
            .query(format!("{WITH_RATING} ORDER BY created_at DESC"))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Single order with rating
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderWithRating>> {
        let record_id = Self::record_id(id);
        let mut result = self
            .base
            .db()
            .query(format!("{WITH_RATING} WHERE id = $id"))
            .bind(("id", record_id))
            .await?;
        let orders: Vec<OrderWithRating> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Status-checked update: applies only while the stored status still
    /// equals `expected`, so a concurrent transition cannot be
    /// double-applied. Returns None when the row is gone or the status
    /// moved under us.
    pub async fn update_status_checked(
        &self,
        id: &str,
        expected: OrderStatus,
        target: OrderStatus,
        now: &str,
    ) -> RepoResult<Option<Order>> {
        let record_id = Self::record_id(id);
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE order SET status = $target, updated_at = $now \
                 WHERE id = $id AND status = $expected RETURN AFTER",
            )
            .bind(("id", record_id))
            .bind(("target", target))
            .bind(("expected", expected))
            .bind(("now", now.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }
}
