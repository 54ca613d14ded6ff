//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models as api;
use shared::models::OrderStatus;

use crate::core::ServerState;
use crate::db::models::OrderCreate;
use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/orders - 全部订单 (按创建时间倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<api::Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// GET /api/orders/:id - 单个订单 (含评分)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<api::Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order.into()))
}

/// POST /api/orders - 创建订单 (初始状态 PENDING)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<api::Order>)> {
    let order = state.order_service().create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Status update request (PATCH body)
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// PATCH /api/orders/:id - 请求状态流转
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<api::Order>> {
    let status = payload
        .status
        .ok_or_else(|| AppError::validation("Status is required"))?;
    let target = OrderStatus::parse(&status)
        .ok_or_else(|| AppError::validation("Invalid status value"))?;

    let order = state.order_service().request_transition(&id, target).await?;
    Ok(Json(order))
}
