//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod menu_item;
pub mod order;
pub mod rating;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use rating::RatingRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 创建: RecordId::from_table_key("order", key)
//   - 获取表名: id.table()
//   - 获取纯ID: id.key().to_string()
//
// 仓储方法同时接受 "order:abc" 和裸 "abc" 两种形式的外部 ID。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
