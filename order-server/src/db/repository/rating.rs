//! Rating Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RATING_TABLE, Rating, RatingWithOrder};

#[derive(Clone)]
pub struct RatingRepository {
    base: BaseRepository,
}

impl RatingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All ratings, newest first, order (with items) fetched
    pub async fn find_all_with_orders(&self) -> RepoResult<Vec<RatingWithOrder>> {
        let ratings: Vec<RatingWithOrder> = self
            .base
            .db()
            .query("SELECT * FROM rating ORDER BY created_at DESC FETCH order")
            .await?
            .take(0)?;
        Ok(ratings)
    }

    /// The rating of one order, if any (1:0..1)
    pub async fn find_by_order(&self, order_id: &RecordId) -> RepoResult<Option<Rating>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM rating WHERE order = $order")
            .bind(("order", order_id.clone()))
            .await?;
        let ratings: Vec<Rating> = result.take(0)?;
        Ok(ratings.into_iter().next())
    }

    /// Create a new rating
    pub async fn create(&self, rating: Rating) -> RepoResult<Rating> {
        let created: Option<Rating> = self.base.db().create(RATING_TABLE).content(rating).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create rating".to_string()))
    }

    /// Replace score and comment in place — identity preserved
    pub async fn update(&self, id: &RecordId, score: i32, comment: String) -> RepoResult<Rating> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET score = $score, comment = $comment RETURN AFTER")
            .bind(("id", id.clone()))
            .bind(("score", score))
            .bind(("comment", comment))
            .await?;
        let ratings: Vec<Rating> = result.take(0)?;
        ratings
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Rating {} not found", id)))
    }
}
