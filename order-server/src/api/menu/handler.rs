//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models as api;

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/menu - 菜单列表 (按分类排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<api::MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
