//! Menu Item Repository

use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MENU_ITEM_TABLE, MenuItem};

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All menu items, ordered by category
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY category ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Single menu item by integer key
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        let record_id = RecordId::from_table_key(MENU_ITEM_TABLE, id);
        let item: Option<MenuItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    /// Number of menu items
    pub async fn count(&self) -> RepoResult<usize> {
        #[derive(Deserialize)]
        struct CountRow {
            count: usize,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM menu_item GROUP ALL")
            .await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|r| r.count).unwrap_or(0))
    }

    /// Create a menu item under an explicit integer key (`menu_item:1`)
    pub async fn create_with_id(&self, id: i64, item: MenuItem) -> RepoResult<MenuItem> {
        let record_id = RecordId::from_table_key(MENU_ITEM_TABLE, id);
        let created: Option<MenuItem> = self.base.db().create(record_id).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }
}
