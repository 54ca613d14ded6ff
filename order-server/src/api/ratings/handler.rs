//! Rating API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use shared::models as api;

use crate::core::ServerState;
use crate::db::models::RatingSubmit;
use crate::db::repository::RatingRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/ratings - 全部评分 (含订单，按创建时间倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<api::RatingWithOrder>>> {
    let repo = RatingRepository::new(state.db.clone());
    let ratings = repo
        .find_all_with_orders()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(ratings.into_iter().map(Into::into).collect()))
}

/// POST /api/ratings - 创建或更新评分 (仅限 READY 订单)
///
/// 新建返回 201，更新已有评分返回 200
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<RatingSubmit>,
) -> AppResult<(StatusCode, Json<api::Rating>)> {
    let order_id = payload
        .order_id
        .ok_or_else(|| AppError::validation("Invalid rating data"))?;
    let score = payload
        .score
        .ok_or_else(|| AppError::validation("Invalid rating data"))?;

    let (rating, created) = state
        .order_service()
        .submit_rating(&order_id, score, payload.comment)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(rating)))
}
