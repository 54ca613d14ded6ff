//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) plus schema bootstrap.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "comanda";
const DATABASE: &str = "comanda";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;
        Self::bootstrap(db).await
    }

    /// In-memory database (tests, demos)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {}", e)))?;
        Self::bootstrap(db).await
    }

    async fn bootstrap(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        // Schema: the unique index enforces the 1:1 order-rating link
        db.query("DEFINE INDEX IF NOT EXISTS uniq_rating_order ON TABLE rating FIELDS order UNIQUE")
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?;

        tracing::info!("Database ready (embedded SurrealDB)");
        Ok(Self { db })
    }
}
